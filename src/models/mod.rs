pub mod answer;
pub mod exam;
pub mod loaders;
pub mod question;
pub mod report;
pub mod subject;

pub use answer::Answer;
pub use exam::{AnswerSource, Exam, ExamKind, ExamOverview, ScriptedAnswers, SubjectRef};
pub use loaders::{default_questions, load_question_bank, parse_question_bank};
pub use question::{Question, QuestionType, QuestionView};
pub use report::{ExamReport, FinalReport, PracticalReport, NOT_AVAILABLE};
pub use subject::Subject;
