use std::str::FromStr;

use actix_web::{web, Scope};
use kamus_core::id::KamusUuidNewtype;

use crate::api::errors::EndpointError;

mod endpoints;
pub use endpoints::*;



/// Given a string or a string slice (or anything else that implements `AsRef<str>`),
/// this function attempts to parse the string as a UUID, returning it
/// as the specified UUID newtype, e.g. [`NoteId`].
///
/// [`NoteId`]: kamus_core::id::NoteId
#[inline]
pub fn parse_uuid<U>(string: impl AsRef<str>) -> Result<U, EndpointError>
where
    U: KamusUuidNewtype + FromStr<Err = uuid::Error>,
{
    U::from_str(string.as_ref()).map_err(|error| EndpointError::InvalidUuidFormat { error })
}


/// Router for the dictionary surface, mounted at `/translation`.
///
/// The registration order matters for the trailing `/{note_id}` pair:
/// the fixed segments (`/post`, `/batch`, `/get`) must come first so that
/// they are never captured as a note id.
#[rustfmt::skip]
pub fn translation_router() -> Scope {
    web::scope("/translation")
        .service(create_translation_pair)
        .service(create_translation_pair_batch)
        .service(lookup_translations)
        .service(update_note)
        .service(delete_note)
}
