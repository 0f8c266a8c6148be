use kamus_core::id::NoteId;
use sqlx::PgConnection;

use crate::{QueryError, QueryResult};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NoteFieldsToUpdate {
    pub new_title: String,

    pub new_contents: String,
}



pub struct NoteMutation;

impl NoteMutation {
    pub async fn update(
        database_connection: &mut PgConnection,
        note_id: NoteId,
        fields_to_update: NoteFieldsToUpdate,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "UPDATE notes \
                SET title = $1, contents = $2 \
                WHERE id = $3",
        )
        .bind(fields_to_update.new_title)
        .bind(fields_to_update.new_contents)
        .bind(note_id.into_uuid())
        .execute(database_connection)
        .await?;

        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "more than one row was affected when updating a note",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }

    pub async fn delete(
        database_connection: &mut PgConnection,
        note_id: NoteId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "DELETE FROM notes \
                WHERE id = $1",
        )
        .bind(note_id.into_uuid())
        .execute(database_connection)
        .await?;

        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "more than one row was affected when deleting a note",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }
}
