use crate::error::{AppError, AppResult, FileError};
use crate::models::question::Question;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 题库文件结构
#[derive(Debug, Clone, Deserialize)]
struct QuestionBank {
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

/// 题库中的一道题
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum QuestionEntry {
    Mcq {
        header: String,
        body: String,
        mark: u32,
        choices: Vec<String>,
        correct: i32,
    },
    TrueFalse {
        header: String,
        body: String,
        mark: u32,
        correct_is_true: bool,
    },
}

impl QuestionEntry {
    fn into_question(self) -> Result<Question, crate::error::QuestionError> {
        match self {
            QuestionEntry::Mcq {
                header,
                body,
                mark,
                choices,
                correct,
            } => Question::mcq(header, body, mark, choices, correct),
            QuestionEntry::TrueFalse {
                header,
                body,
                mark,
                correct_is_true,
            } => Ok(Question::true_false(header, body, mark, correct_is_true)),
        }
    }
}

/// 解析题库文本
///
/// 任意一道题构造失败都会使整个题库加载失败，`source_name` 用于错误信息。
pub fn parse_question_bank(content: &str, source_name: &str) -> AppResult<Vec<Question>> {
    let bank: QuestionBank = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: source_name.to_string(),
        source,
    })?;

    bank.questions
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            entry.into_question().map_err(|source| {
                AppError::from(FileError::InvalidQuestion {
                    path: source_name.to_string(),
                    position: idx + 1,
                    source,
                })
            })
        })
        .collect()
}

/// 从 TOML 文件加载题库
pub async fn load_question_bank(path: &Path) -> AppResult<Vec<Question>> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let questions = parse_question_bank(&content, &path_str)?;
    tracing::info!("成功加载 {} 个题目: {}", questions.len(), path_str);

    Ok(questions)
}
