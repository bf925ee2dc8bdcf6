//! 考后报告
//!
//! 报告是纯数据，文本格式由 `Display` 给出，也可以序列化为 JSON。

use crate::error::AppResult;
use crate::models::answer::Answer;
use serde::Serialize;
use std::fmt;

/// 作答缺失或编号无效时的占位文本
pub const NOT_AVAILABLE: &str = "N/A";

/// 考后报告
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExamReport {
    Practical(PracticalReport),
    Final(FinalReport),
}

impl ExamReport {
    pub fn total_grade(&self) -> u64 {
        match self {
            ExamReport::Practical(r) => r.total_grade,
            ExamReport::Final(r) => r.total_grade,
        }
    }

    pub fn total_marks(&self) -> u64 {
        match self {
            ExamReport::Practical(r) => r.total_marks,
            ExamReport::Final(r) => r.total_marks,
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ExamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamReport::Practical(r) => fmt::Display::fmt(r, f),
            ExamReport::Final(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// 练习考试报告：只公布正确答案，不回显考生作答
#[derive(Debug, Clone, Serialize)]
pub struct PracticalReport {
    pub items: Vec<PracticalItem>,
    pub total_grade: u64,
    pub total_marks: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticalItem {
    pub number: usize,
    pub body: String,
    pub choices: Vec<Answer>,
    pub correct_answer: String,
}

impl fmt::Display for PracticalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Practical Exam: Correct Answers ---")?;
        for item in &self.items {
            writeln!(f)?;
            writeln!(f, "Q{}: {}", item.number, item.body)?;
            writeln!(f, "Choices:")?;
            for choice in &item.choices {
                writeln!(f, "{}", choice)?;
            }
            writeln!(f, "Correct Answer: {}", item.correct_answer)?;
        }
        writeln!(f)?;
        write!(f, "Your Grade: {} / {}", self.total_grade, self.total_marks)
    }
}

/// 期末考试报告：逐题列出作答、正确答案和得分
#[derive(Debug, Clone, Serialize)]
pub struct FinalReport {
    pub items: Vec<FinalItem>,
    pub total_grade: u64,
    pub total_marks: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalItem {
    pub number: usize,
    pub body: String,
    pub mark: u32,
    pub choices: Vec<Answer>,
    pub user_answer: String,
    pub correct_answer: String,
    pub earned: u32,
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Final Exam Review ---")?;
        for item in &self.items {
            writeln!(f)?;
            writeln!(f, "Q{}: {}  (Mark {})", item.number, item.body, item.mark)?;
            for choice in &item.choices {
                writeln!(f, "{}", choice)?;
            }
            writeln!(f, "Your Answer: {}", item.user_answer)?;
            writeln!(f, "Correct Answer: {}", item.correct_answer)?;
            writeln!(f, "Earned: {}", item.earned)?;
        }
        writeln!(f)?;
        write!(f, "Total Grade: {} / {}", self.total_grade, self.total_marks)
    }
}
