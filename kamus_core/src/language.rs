use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum LanguagePairError {
    #[error("unrecognized language pair: {pair}")]
    UnrecognizedPair { pair: String },
}


/// One of the two languages the dictionary covers, as it appears
/// on the wire (its IETF language tag).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[serde(rename = "tr")]
    Turkish,

    #[serde(rename = "id")]
    Indonesian,
}


/// A lookup direction, parsed from the `langpair` query parameter.
///
/// Only the two directions between Turkish and Indonesian exist;
/// anything else is rejected before any database work happens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LanguagePair {
    TurkishToIndonesian,
    IndonesianToTurkish,
}

impl LanguagePair {
    pub fn from_request_code(code: &str) -> Result<Self, LanguagePairError> {
        match code {
            "tr|id" => Ok(Self::TurkishToIndonesian),
            "id|tr" => Ok(Self::IndonesianToTurkish),
            _ => Err(LanguagePairError::UnrecognizedPair {
                pair: code.to_string(),
            }),
        }
    }

    pub fn as_request_code(self) -> &'static str {
        match self {
            Self::TurkishToIndonesian => "tr|id",
            Self::IndonesianToTurkish => "id|tr",
        }
    }

    pub fn source_language(self) -> Language {
        match self {
            Self::TurkishToIndonesian => Language::Turkish,
            Self::IndonesianToTurkish => Language::Indonesian,
        }
    }

    pub fn target_language(self) -> Language {
        match self {
            Self::TurkishToIndonesian => Language::Indonesian,
            Self::IndonesianToTurkish => Language::Turkish,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_both_valid_language_pair_codes() {
        assert_eq!(
            LanguagePair::from_request_code("tr|id").unwrap(),
            LanguagePair::TurkishToIndonesian
        );

        assert_eq!(
            LanguagePair::from_request_code("id|tr").unwrap(),
            LanguagePair::IndonesianToTurkish
        );
    }

    #[test]
    fn rejects_unknown_language_pair_codes() {
        assert!(LanguagePair::from_request_code("").is_err());
        assert!(LanguagePair::from_request_code("tr|en").is_err());
        assert!(LanguagePair::from_request_code("id|id").is_err());
        assert!(LanguagePair::from_request_code("TR|ID").is_err());
        assert!(LanguagePair::from_request_code("tr|id ").is_err());
    }

    #[test]
    fn request_code_round_trips() {
        for pair in [
            LanguagePair::TurkishToIndonesian,
            LanguagePair::IndonesianToTurkish,
        ] {
            assert_eq!(
                LanguagePair::from_request_code(pair.as_request_code()).unwrap(),
                pair
            );
        }
    }

    #[test]
    fn source_and_target_follow_the_pair_direction() {
        assert_eq!(
            LanguagePair::TurkishToIndonesian.source_language(),
            Language::Turkish
        );
        assert_eq!(
            LanguagePair::TurkishToIndonesian.target_language(),
            Language::Indonesian
        );

        assert_eq!(
            LanguagePair::IndonesianToTurkish.source_language(),
            Language::Indonesian
        );
        assert_eq!(
            LanguagePair::IndonesianToTurkish.target_language(),
            Language::Turkish
        );
    }
}
