use chrono::Utc;
use kamus_core::id::{IndonesianTranslationId, TurkishWordId};
use sqlx::{Acquire, PgConnection};

use super::TranslationPairModel;
use crate::entities::indonesian_translation::IntermediateIndonesianTranslationModel;
use crate::entities::turkish_word::IntermediateTurkishWordModel;
use crate::{IntoExternalModel, QueryResult};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewTranslationPair {
    pub turkish_word: String,

    pub indonesian_translation: String,
}



pub struct TranslationPairMutation;

impl TranslationPairMutation {
    /// Inserts a Turkish word and its linked Indonesian translation
    /// inside a single transaction; after this call either both rows
    /// exist or neither does.
    pub async fn create(
        database_connection: &mut PgConnection,
        pair_to_create: NewTranslationPair,
    ) -> QueryResult<TranslationPairModel> {
        let mut transaction = database_connection.begin().await?;

        let new_turkish_word_id = TurkishWordId::generate();
        let new_pair_created_at = Utc::now();
        let new_pair_last_updated_at = new_pair_created_at;

        let intermediate_turkish_word = sqlx::query_as::<_, IntermediateTurkishWordModel>(
            r#"
            INSERT INTO turkish_words (id, uraian, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING
                id, uraian AS word, created_by, last_updated_by,
                created_at, updated_at AS last_updated_at
            "#,
        )
        .bind(new_turkish_word_id.into_uuid())
        .bind(&pair_to_create.turkish_word)
        .bind(new_pair_created_at)
        .bind(new_pair_last_updated_at)
        .fetch_one(&mut *transaction)
        .await?;

        let new_indonesian_translation_id = IndonesianTranslationId::generate();

        let intermediate_indonesian_translation =
            sqlx::query_as::<_, IntermediateIndonesianTranslationModel>(
                r#"
                INSERT INTO indonesian_translations (id, turkish_word_id, uraian, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING
                    id, turkish_word_id, uraian AS translation, created_by, last_updated_by,
                    created_at, updated_at AS last_updated_at
                "#,
            )
            .bind(new_indonesian_translation_id.into_uuid())
            .bind(new_turkish_word_id.into_uuid())
            .bind(&pair_to_create.indonesian_translation)
            .bind(new_pair_created_at)
            .bind(new_pair_last_updated_at)
            .fetch_one(&mut *transaction)
            .await?;

        transaction.commit().await?;


        Ok(TranslationPairModel {
            turkish_word: intermediate_turkish_word.into_external_model(),
            indonesian_translation: intermediate_indonesian_translation.into_external_model(),
        })
    }
}
