use chrono::{DateTime, Utc};
use kamus_core::id::TurkishWordId;
use uuid::Uuid;

use crate::IntoExternalModel;


pub struct TurkishWordModel {
    pub id: TurkishWordId,

    pub word: String,

    pub created_by: Option<String>,

    pub last_updated_by: Option<String>,

    pub created_at: DateTime<Utc>,

    pub last_updated_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(crate) struct IntermediateTurkishWordModel {
    pub(crate) id: Uuid,

    pub(crate) word: String,

    pub(crate) created_by: Option<String>,

    pub(crate) last_updated_by: Option<String>,

    pub(crate) created_at: DateTime<Utc>,

    pub(crate) last_updated_at: DateTime<Utc>,
}

impl IntoExternalModel for IntermediateTurkishWordModel {
    type ExternalModel = TurkishWordModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let id = TurkishWordId::new(self.id);

        Self::ExternalModel {
            id,
            word: self.word,
            created_by: self.created_by,
            last_updated_by: self.last_updated_by,
            created_at: self.created_at,
            last_updated_at: self.last_updated_at,
        }
    }
}
