pub mod input;
pub mod output;

pub use input::{ClauseFile, parse_clause_file, parse_clause_json};
pub use output::{PrintablePage, write_fragment};
