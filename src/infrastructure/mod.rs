pub mod console;

pub use console::{prompt_exam_type, ConsoleAnswerSource};
