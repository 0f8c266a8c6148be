use chrono::{DateTime, Utc};

use crate::entities::indonesian_translation::IndonesianTranslationModel;
use crate::entities::turkish_word::TurkishWordModel;


/// A Turkish word together with the Indonesian translation
/// it was inserted with.
pub struct TranslationPairModel {
    pub turkish_word: TurkishWordModel,

    pub indonesian_translation: IndonesianTranslationModel,
}


/// One row of a dictionary search. The attribution and timestamp
/// columns come from the target-side (translation) row.
#[derive(sqlx::FromRow)]
pub struct TranslationMatchModel {
    pub segment: String,

    pub translation: String,

    pub created_by: Option<String>,

    pub last_updated_by: Option<String>,

    pub created_at: DateTime<Utc>,

    pub last_updated_at: DateTime<Utc>,
}
