use kamus_core::id::NoteId;
use uuid::Uuid;

use crate::IntoExternalModel;


pub struct NoteModel {
    pub id: NoteId,

    pub title: String,

    pub contents: String,
}


#[derive(sqlx::FromRow)]
pub(super) struct IntermediateNoteModel {
    pub(super) id: Uuid,

    pub(super) title: String,

    pub(super) contents: String,
}

impl IntoExternalModel for IntermediateNoteModel {
    type ExternalModel = NoteModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let id = NoteId::new(self.id);

        Self::ExternalModel {
            id,
            title: self.title,
            contents: self.contents,
        }
    }
}
