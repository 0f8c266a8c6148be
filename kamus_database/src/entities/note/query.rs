use kamus_core::id::NoteId;
use sqlx::PgConnection;

use super::IntermediateNoteModel;
use crate::{IntoExternalModel, QueryResult};


pub struct NoteQuery;

impl NoteQuery {
    pub async fn get_by_id(
        database_connection: &mut PgConnection,
        note_id: NoteId,
    ) -> QueryResult<Option<super::NoteModel>> {
        let intermediate_note = sqlx::query_as::<_, IntermediateNoteModel>(
            "SELECT id, title, contents \
                FROM notes \
                WHERE id = $1",
        )
        .bind(note_id.into_uuid())
        .fetch_optional(database_connection)
        .await?;

        Ok(intermediate_note.map(IntermediateNoteModel::into_external_model))
    }
}
