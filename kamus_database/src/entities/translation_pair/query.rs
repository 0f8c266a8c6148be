use futures_core::stream::BoxStream;
use kamus_core::language::LanguagePair;
use sqlx::PgConnection;

use super::TranslationMatchModel;
use crate::{QueryError, QueryResult};



type RawTranslationMatchStream<'c> = BoxStream<'c, Result<TranslationMatchModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct TranslationMatchStream<'c>;
    transforms stream RawTranslationMatchStream<'c> => stream of QueryResult<TranslationMatchModel>:
        |value|
            value.map(
                |some| some.map_err(|error| QueryError::SqlxError { error })
            )
);



pub struct TranslationPairQuery;

impl TranslationPairQuery {
    /// Streams all dictionary entries whose source-language word
    /// contains `search_query`, case-insensitively. `%` and `_` in the
    /// query act as ordinary SQL pattern wildcards.
    ///
    /// Matches are ordered by the source word's id, so results are
    /// stable across identical lookups.
    pub async fn search_by_source_word(
        database_connection: &mut PgConnection,
        language_pair: LanguagePair,
        search_query: String,
    ) -> TranslationMatchStream<'_> {
        let contains_pattern = format!("%{}%", search_query);

        let match_stream = match language_pair {
            LanguagePair::TurkishToIndonesian => sqlx::query_as::<_, TranslationMatchModel>(
                r#"
                SELECT
                    turkish_words.uraian AS segment,
                    indonesian_translations.uraian AS translation,
                    indonesian_translations.created_by AS created_by,
                    indonesian_translations.last_updated_by AS last_updated_by,
                    indonesian_translations.created_at AS created_at,
                    indonesian_translations.updated_at AS last_updated_at
                FROM indonesian_translations
                INNER JOIN turkish_words
                    ON indonesian_translations.turkish_word_id = turkish_words.id
                WHERE turkish_words.uraian ILIKE $1
                ORDER BY turkish_words.id, indonesian_translations.id
                "#,
            )
            .bind(contains_pattern)
            .fetch(database_connection),
            LanguagePair::IndonesianToTurkish => sqlx::query_as::<_, TranslationMatchModel>(
                r#"
                SELECT
                    indonesian_translations.uraian AS segment,
                    turkish_words.uraian AS translation,
                    turkish_words.created_by AS created_by,
                    turkish_words.last_updated_by AS last_updated_by,
                    turkish_words.created_at AS created_at,
                    turkish_words.updated_at AS last_updated_at
                FROM turkish_words
                INNER JOIN indonesian_translations
                    ON indonesian_translations.turkish_word_id = turkish_words.id
                WHERE indonesian_translations.uraian ILIKE $1
                ORDER BY indonesian_translations.id
                "#,
            )
            .bind(contains_pattern)
            .fetch(database_connection),
        };

        TranslationMatchStream::new(match_stream)
    }
}
