use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::language::Language;


/// Fixed `"model"` value attached to every lookup match.
pub const TRANSLATION_MODEL_TAG: &str = "neural";


#[derive(Deserialize, Clone, PartialEq, Eq, Debug, IntoParams)]
pub struct TranslationLookupRequest {
    /// Lookup direction, either `tr|id` or `id|tr`.
    pub langpair: Option<String>,

    /// Word (or word fragment) to look up in the source language.
    pub q: Option<String>,
}


/// A single dictionary hit inside [`TranslationLookupResponse`].
///
/// The kebab-case attribution and timestamp keys are part of the
/// public wire format and must not be renamed.
#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
pub struct TranslationMatch {
    /// Position of this match in the response, starting at 1.
    pub id: u32,

    /// The matched word in the source language.
    pub segment: String,

    /// Its translation in the target language.
    pub translation: String,

    pub source: Language,

    pub target: Language,

    #[serde(rename = "created-by")]
    pub created_by: Option<String>,

    #[serde(rename = "last-updated-by")]
    pub last_updated_by: Option<String>,

    #[serde(rename = "create-date")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "last-update-date")]
    pub last_updated_at: DateTime<Utc>,

    /// Always [`TRANSLATION_MODEL_TAG`].
    pub model: String,
}


#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
pub struct TranslationLookupResponseData {
    /// Echo of the `q` query parameter.
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}


/// Full lookup document returned by `GET /translation/get`.
///
/// Everything outside `responseData` and `matches` is fixed filler
/// kept for compatibility with clients of the MyMemory format. Note
/// that `exception_code` really is snake_case while its camelCase
/// siblings are not.
#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[schema(
    example = json!({
        "responseData": {
            "translatedText": "merhaba"
        },
        "quotaFinished": false,
        "mtLangSupported": null,
        "responseDetails": "",
        "responseStatus": 200,
        "responderId": null,
        "exception_code": null,
        "matches": [
            {
                "id": 1,
                "segment": "merhaba",
                "translation": "halo",
                "source": "tr",
                "target": "id",
                "created-by": null,
                "last-updated-by": null,
                "create-date": "2024-02-18T09:30:00Z",
                "last-update-date": "2024-02-18T09:30:00Z",
                "model": "neural"
            }
        ]
    })
)]
pub struct TranslationLookupResponse {
    #[serde(rename = "responseData")]
    pub response_data: TranslationLookupResponseData,

    #[serde(rename = "quotaFinished")]
    pub quota_finished: bool,

    #[serde(rename = "mtLangSupported")]
    pub mt_lang_supported: Option<bool>,

    #[serde(rename = "responseDetails")]
    pub response_details: String,

    #[serde(rename = "responseStatus")]
    pub response_status: u16,

    #[serde(rename = "responderId")]
    pub responder_id: Option<String>,

    pub exception_code: Option<i32>,

    pub matches: Vec<TranslationMatch>,
}

impl TranslationLookupResponse {
    /// Builds a lookup document around the given matches, echoing
    /// the search query and filling in the fixed fields.
    pub fn new<Q>(search_query: Q, matches: Vec<TranslationMatch>) -> Self
    where
        Q: Into<String>,
    {
        Self {
            response_data: TranslationLookupResponseData {
                translated_text: search_query.into(),
            },
            quota_finished: false,
            mt_lang_supported: None,
            response_details: String::new(),
            response_status: 200,
            responder_id: None,
            exception_code: None,
            matches,
        }
    }
}


#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[schema(
    example = json!({
        "turkishWord": "merhaba",
        "indonesianTranslation": "halo"
    })
)]
pub struct TranslationPairCreationRequest {
    #[serde(rename = "turkishWord")]
    pub turkish_word: Option<String>,

    #[serde(rename = "indonesianTranslation")]
    pub indonesian_translation: Option<String>,
}


#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::language::LanguagePair;

    fn sample_match(sequence_number: u32, pair: LanguagePair) -> TranslationMatch {
        let timestamp = Utc.with_ymd_and_hms(2024, 2, 18, 9, 30, 0).unwrap();

        TranslationMatch {
            id: sequence_number,
            segment: "merhaba".to_string(),
            translation: "halo".to_string(),
            source: pair.source_language(),
            target: pair.target_language(),
            created_by: None,
            last_updated_by: Some("editor".to_string()),
            created_at: timestamp,
            last_updated_at: timestamp,
            model: TRANSLATION_MODEL_TAG.to_string(),
        }
    }

    #[test]
    fn match_serializes_with_kebab_case_attribution_keys() {
        let serialized =
            serde_json::to_value(sample_match(1, LanguagePair::TurkishToIndonesian)).unwrap();

        assert_eq!(
            serialized,
            json!({
                "id": 1,
                "segment": "merhaba",
                "translation": "halo",
                "source": "tr",
                "target": "id",
                "created-by": null,
                "last-updated-by": "editor",
                "create-date": "2024-02-18T09:30:00Z",
                "last-update-date": "2024-02-18T09:30:00Z",
                "model": "neural"
            })
        );
    }

    #[test]
    fn lookup_document_echoes_the_query_and_fixes_the_filler_fields() {
        let response = TranslationLookupResponse::new(
            "merhaba",
            vec![sample_match(1, LanguagePair::TurkishToIndonesian)],
        );

        let serialized = serde_json::to_value(&response).unwrap();

        assert_eq!(
            serialized["responseData"],
            json!({ "translatedText": "merhaba" })
        );
        assert_eq!(serialized["quotaFinished"], json!(false));
        assert_eq!(serialized["mtLangSupported"], json!(null));
        assert_eq!(serialized["responseDetails"], json!(""));
        assert_eq!(serialized["responseStatus"], json!(200));
        assert_eq!(serialized["responderId"], json!(null));
        assert_eq!(serialized["exception_code"], json!(null));
        assert_eq!(serialized["matches"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn empty_lookup_document_keeps_an_empty_match_array() {
        let serialized =
            serde_json::to_value(TranslationLookupResponse::new("yok", Vec::new())).unwrap();

        assert_eq!(serialized["matches"], json!([]));
        assert_eq!(
            serialized["responseData"]["translatedText"],
            json!("yok")
        );
    }

    #[test]
    fn creation_request_tolerates_missing_and_null_fields() {
        let missing: TranslationPairCreationRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.turkish_word, None);
        assert_eq!(missing.indonesian_translation, None);

        let null_fields: TranslationPairCreationRequest = serde_json::from_value(json!({
            "turkishWord": null,
            "indonesianTranslation": "halo"
        }))
        .unwrap();
        assert_eq!(null_fields.turkish_word, None);
        assert_eq!(
            null_fields.indonesian_translation.as_deref(),
            Some("halo")
        );
    }
}
