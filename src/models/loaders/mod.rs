pub mod default_bank;
pub mod toml_loader;

pub use default_bank::default_questions;
pub use toml_loader::{load_question_bank, parse_question_bank};
