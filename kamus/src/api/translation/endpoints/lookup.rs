use actix_web::{get, web};
use futures_util::StreamExt;
use kamus_core::api_models::{
    ErrorResponse,
    TranslationLookupRequest,
    TranslationLookupResponse,
    TranslationMatch,
    TRANSLATION_MODEL_TAG,
};
use kamus_core::language::LanguagePair;
use kamus_database::entities::{self, TranslationMatchModel};

use crate::api::errors::{EndpointError, EndpointResponseBuilder, EndpointResult};
use crate::api::openapi;
use crate::state::ApplicationState;




/// Builds a single entry of the `matches` array from a database row.
///
/// `sequential_id` is the 1-based position of the match in result order;
/// the wire format numbers matches from 1 on every lookup, regardless of
/// any database identifiers.
fn shape_translation_match(
    sequential_id: u32,
    language_pair: LanguagePair,
    match_model: TranslationMatchModel,
) -> TranslationMatch {
    TranslationMatch {
        id: sequential_id,
        segment: match_model.segment,
        translation: match_model.translation,
        source: language_pair.source_language(),
        target: language_pair.target_language(),
        created_by: match_model.created_by,
        last_updated_by: match_model.last_updated_by,
        created_at: match_model.created_at,
        last_updated_at: match_model.last_updated_at,
        model: TRANSLATION_MODEL_TAG.to_string(),
    }
}




/// Look up translations
///
/// This endpoint searches the dictionary in the direction given by `langpair`
/// and returns all entries whose source-language word contains `q`
/// (case-insensitively), shaped as a MyMemory-compatible document.
///
/// An absent `q` is treated as the empty string, which matches every entry.
#[utoipa::path(
    get,
    path = "/translation/get",
    tag = "translation",
    params(
        TranslationLookupRequest
    ),
    responses(
        (
            status = 200,
            description = "The matching dictionary entries.",
            body = TranslationLookupResponse,
        ),
        (
            status = 400,
            description = "Missing or unrecognized language pair.",
            body = ErrorResponse,
            example = json!({ "status": 400, "message": "langpair must be \"tr|id\" or \"id|tr\"" })
        ),
        openapi::response::QueryTimeout,
        openapi::response::InternalServerError,
    )
)]
#[get("/get")]
pub async fn lookup_translations(
    state: ApplicationState,
    query_parameters: web::Query<TranslationLookupRequest>,
) -> EndpointResult {
    let query_parameters = query_parameters.into_inner();

    let Some(langpair) = query_parameters.langpair else {
        return Err(EndpointError::invalid_request("langpair is required"));
    };

    let language_pair = LanguagePair::from_request_code(&langpair).map_err(|_| {
        EndpointError::invalid_request("langpair must be \"tr|id\" or \"id|tr\"")
    })?;

    let search_query = query_parameters.q.unwrap_or_default();


    let mut database_connection = state.acquire_database_connection().await?;

    let mut match_stream = entities::TranslationPairQuery::search_by_source_word(
        &mut database_connection,
        language_pair,
        search_query.clone(),
    )
    .await;


    let mut translation_matches = Vec::new();

    while let Some(match_result) = match_stream.next().await {
        let sequential_id = translation_matches.len() as u32 + 1;

        translation_matches.push(shape_translation_match(
            sequential_id,
            language_pair,
            match_result?,
        ));
    }


    EndpointResponseBuilder::ok()
        .with_json_body(TranslationLookupResponse::new(
            search_query,
            translation_matches,
        ))
        .build()
}



#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use kamus_core::language::Language;

    use super::*;

    fn sample_match_model() -> TranslationMatchModel {
        let timestamp = Utc.with_ymd_and_hms(2024, 2, 18, 9, 30, 0).unwrap();

        TranslationMatchModel {
            segment: "merhaba".to_string(),
            translation: "halo".to_string(),
            created_by: Some("seeder".to_string()),
            last_updated_by: None,
            created_at: timestamp,
            last_updated_at: timestamp,
        }
    }

    #[test]
    fn shaping_assigns_the_given_sequential_id_and_model_tag() {
        let first = shape_translation_match(
            1,
            LanguagePair::TurkishToIndonesian,
            sample_match_model(),
        );
        let third = shape_translation_match(
            3,
            LanguagePair::TurkishToIndonesian,
            sample_match_model(),
        );

        assert_eq!(first.id, 1);
        assert_eq!(third.id, 3);
        assert_eq!(first.model, "neural");
    }

    #[test]
    fn shaping_resolves_languages_from_the_pair() {
        let turkish_to_indonesian = shape_translation_match(
            1,
            LanguagePair::TurkishToIndonesian,
            sample_match_model(),
        );

        assert_eq!(turkish_to_indonesian.source, Language::Turkish);
        assert_eq!(turkish_to_indonesian.target, Language::Indonesian);

        let indonesian_to_turkish = shape_translation_match(
            1,
            LanguagePair::IndonesianToTurkish,
            sample_match_model(),
        );

        assert_eq!(indonesian_to_turkish.source, Language::Indonesian);
        assert_eq!(indonesian_to_turkish.target, Language::Turkish);
    }

    #[test]
    fn shaping_copies_the_row_contents_and_attribution() {
        let shaped = shape_translation_match(
            1,
            LanguagePair::TurkishToIndonesian,
            sample_match_model(),
        );

        assert_eq!(shaped.segment, "merhaba");
        assert_eq!(shaped.translation, "halo");
        assert_eq!(shaped.created_by.as_deref(), Some("seeder"));
        assert_eq!(shaped.last_updated_by, None);
        assert_eq!(shaped.created_at, shaped.last_updated_at);
    }
}
