mod lookup;
mod notes;
mod pairs;

pub use lookup::*;
pub use notes::*;
pub use pairs::*;
