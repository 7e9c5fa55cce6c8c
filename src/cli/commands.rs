pub mod inspect;
pub mod serve;

pub use inspect::{InspectSource, inspect};
pub use serve::serve;
