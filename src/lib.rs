pub mod entropy;
pub mod generator;
pub mod input;
pub mod output;
pub mod ui;

pub use entropy::{Strength, entropy};
pub use generator::{Candidates, generate, leet_variants};
pub use input::{extract_tokens, parse_years};
pub use output::write_words;
