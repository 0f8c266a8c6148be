pub mod indonesian_translation;
pub mod note;
pub mod translation_pair;
pub mod turkish_word;

pub use indonesian_translation::*;
pub use note::*;
pub use translation_pair::*;
pub use turkish_word::*;
