use chrono::{DateTime, Utc};
use kamus_core::id::{IndonesianTranslationId, TurkishWordId};
use uuid::Uuid;

use crate::IntoExternalModel;


pub struct IndonesianTranslationModel {
    pub id: IndonesianTranslationId,

    pub turkish_word_id: TurkishWordId,

    pub translation: String,

    pub created_by: Option<String>,

    pub last_updated_by: Option<String>,

    pub created_at: DateTime<Utc>,

    pub last_updated_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(crate) struct IntermediateIndonesianTranslationModel {
    pub(crate) id: Uuid,

    pub(crate) turkish_word_id: Uuid,

    pub(crate) translation: String,

    pub(crate) created_by: Option<String>,

    pub(crate) last_updated_by: Option<String>,

    pub(crate) created_at: DateTime<Utc>,

    pub(crate) last_updated_at: DateTime<Utc>,
}

impl IntoExternalModel for IntermediateIndonesianTranslationModel {
    type ExternalModel = IndonesianTranslationModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let id = IndonesianTranslationId::new(self.id);
        let turkish_word_id = TurkishWordId::new(self.turkish_word_id);

        Self::ExternalModel {
            id,
            turkish_word_id,
            translation: self.translation,
            created_by: self.created_by,
            last_updated_by: self.last_updated_by,
            created_at: self.created_at,
            last_updated_at: self.last_updated_at,
        }
    }
}
