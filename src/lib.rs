//! # Exam OOP
//!
//! 终端考试演示：科目创建考试，加入题目，考生逐题作答，最后打分并输出报告。
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 选项、题目、考试、科目与考后报告
//! - `Question` - 判断题 / 单选题，负责打分与排序规则
//! - `Exam` - 练习 / 期末，负责作答流程、总分与报告
//! - `loaders` - 内置题目与 TOML 题库
//!
//! ### ② 基础设施层（Infrastructure）
//! - `infrastructure/` - 终端读写，只向考试提供解析好的作答编号
//!
//! ### ③ 编排层（App）
//! - `app` - 根据配置组装科目、考试与作答来源，输出报告

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::{Config, ReportFormat};
pub use error::{AppError, AppResult, QuestionError};
pub use models::{
    Answer, AnswerSource, Exam, ExamKind, ExamReport, Question, QuestionType, ScriptedAnswers,
    Subject,
};
