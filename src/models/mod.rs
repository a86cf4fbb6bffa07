pub mod clause;
pub mod risk;
pub mod suggestion;

pub use clause::*;
pub use risk::*;
pub use suggestion::*;
