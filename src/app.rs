//! 应用编排
//!
//! 创建科目与考试、加载题目、驱动作答、输出报告。

use crate::config::{Config, ReportFormat};
use crate::infrastructure::{prompt_exam_type, ConsoleAnswerSource};
use crate::models::exam::{AnswerSource, Exam, ExamKind, ScriptedAnswers};
use crate::models::loaders::{default_questions, load_question_bank};
use crate::models::question::Question;
use crate::models::report::ExamReport;
use crate::models::subject::Subject;
use crate::utils::logging::{append_report, log_exam_ready, log_final_stats, log_startup};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    subject: Subject,
}

impl App {
    /// 初始化应用：确定考试类型并加入题目
    pub async fn initialize(config: Config) -> Result<Self> {
        let mut subject = Subject::new(config.subject_id, config.subject_name.clone());
        log_startup(&subject);

        let kind = match config.exam_type {
            Some(kind) => kind,
            None => {
                let stdin = io::stdin();
                let mut reader = stdin.lock();
                let mut writer = io::stdout();
                prompt_exam_type(&mut reader, &mut writer).context("读取考试类型失败")?
            }
        };

        let questions = load_questions(&config).await?;
        if questions.is_empty() {
            warn!("⚠️ 题库为空，考试没有题目");
        }

        let exam = subject.create_exam(kind_name(kind));
        for question in questions {
            exam.add_question(question);
        }
        log_exam_ready(exam);

        Ok(Self { config, subject })
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// 运行考试并输出报告
    pub fn run(&mut self) -> Result<ExamReport> {
        let exam = self
            .subject
            .exam_mut()
            .context("科目尚未创建考试")?;

        match &self.config.scripted_answers {
            Some(answers) => {
                info!("使用预设答案作答: {:?}", answers);
                run_exam(exam, &mut ScriptedAnswers::new(answers.clone()))?;
            }
            None => {
                let stdin = io::stdin();
                let mut source = ConsoleAnswerSource::new(stdin.lock(), io::stdout());
                run_exam(exam, &mut source)?;
            }
        }

        let report = exam.show_exam();
        log_final_stats(exam);

        let rendered = render_report(&report, self.config.report_format)?;
        println!("\n{}", rendered);

        if let Some(path) = &self.config.report_file {
            append_report(path, &self.subject, &rendered)
                .with_context(|| format!("无法写入报告文件: {}", path))?;
        }

        Ok(report)
    }
}

fn run_exam(exam: &mut Exam, source: &mut dyn AnswerSource) -> Result<()> {
    exam.run(source).context("作答过程中断")
}

/// 题库来源：配置的文件或内置题目
async fn load_questions(config: &Config) -> Result<Vec<Question>> {
    match &config.question_file {
        Some(path) => {
            info!("\n📁 正在加载题库: {}", path);
            load_question_bank(Path::new(path))
                .await
                .with_context(|| format!("无法加载题库: {}", path))
        }
        None => default_questions().context("内置题目无效"),
    }
}

fn kind_name(kind: ExamKind) -> &'static str {
    match kind {
        ExamKind::Practical => "practical",
        ExamKind::Final => "final",
    }
}

/// 按配置格式渲染报告
pub fn render_report(report: &ExamReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => report.to_json().context("报告序列化失败"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted_config(kind: ExamKind, answers: Vec<i32>) -> Config {
        Config {
            exam_type: Some(kind),
            scripted_answers: Some(answers),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_with_default_bank() {
        let app = App::initialize(scripted_config(ExamKind::Final, vec![])).await.unwrap();
        let exam = app.subject().exam().unwrap();
        assert_eq!(exam.kind(), ExamKind::Final);
        assert_eq!(exam.number_of_questions(), 3);
        assert_eq!(exam.subject().name, "OOP_C#");
    }

    #[tokio::test]
    async fn test_scripted_run() {
        // 排序后：MCQ(继承), MCQ(排序), True/False
        let mut app = App::initialize(scripted_config(ExamKind::Final, vec![3, 3, 1]))
            .await
            .unwrap();
        let report = app.run().unwrap();
        assert_eq!(report.total_grade(), 10);
        assert_eq!(report.total_marks(), 15);
    }

    #[tokio::test]
    async fn test_missing_scripted_answers_fail_run() {
        let mut app = App::initialize(scripted_config(ExamKind::Practical, vec![1]))
            .await
            .unwrap();
        assert!(app.run().is_err());
    }

    #[test]
    fn test_kind_name_round_trips_through_factory() {
        for kind in [ExamKind::Practical, ExamKind::Final] {
            assert_eq!(ExamKind::parse_loose(kind_name(kind)), kind);
        }
    }
}
