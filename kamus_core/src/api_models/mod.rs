pub mod health;
pub mod messages;
pub mod notes;
pub mod translation;

pub use health::*;
pub use messages::*;
pub use notes::*;
pub use translation::*;
