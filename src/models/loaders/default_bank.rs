use crate::error::QuestionError;
use crate::models::question::Question;

/// 内置题目（未指定题库文件时使用）
pub fn default_questions() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::mcq(
            "MCQ",
            "Which keyword enables inheritance in C#?",
            5,
            ["extends", "inherits", ":", "base"],
            3,
        )?,
        Question::true_false(
            "True/False",
            "Interfaces in C# can contain fields.",
            5,
            false,
        ),
        Question::mcq(
            "MCQ",
            "Which interface is used to support sorting?",
            5,
            ["IDisposable", "ICloneable", "IComparable", "IEnumerable"],
            3,
        )?,
    ])
}
