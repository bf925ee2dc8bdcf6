//! 日志工具模块
//!
//! 提供日志格式化和报告落盘的辅助函数

use crate::error::{AppError, AppResult};
use crate::models::exam::Exam;
use crate::models::subject::Subject;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `subject`: 当前科目
pub fn log_startup(subject: &Subject) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 科目: {}", subject);
    info!("{}", "=".repeat(60));
}

/// 记录考试就绪信息
///
/// # 参数
/// - `exam`: 已加入题目的考试
pub fn log_exam_ready(exam: &Exam) {
    info!(
        "📋 {} 已就绪: {} 题, 满分 {}, 时长 {} 分钟",
        exam.kind(),
        exam.number_of_questions(),
        exam.total_marks(),
        exam.time_in_minutes()
    );
    for question in exam.questions() {
        info!("  - {} | {}", question, truncate_text(question.body(), 40));
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `exam`: 作答完成的考试
pub fn log_final_stats(exam: &Exam) {
    info!("\n{}", "=".repeat(60));
    info!("📊 考试完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "✅ 得分: {}/{}",
        exam.calculate_total_grade(),
        exam.total_marks()
    );
    info!("{}", "=".repeat(60));
}

/// 将报告追加到文件，带时间戳头
///
/// # 参数
/// - `path`: 报告文件路径
/// - `subject`: 当前科目
/// - `rendered`: 已渲染的报告文本
///
/// # 返回
/// 返回是否成功写入
pub fn append_report(path: &str, subject: &Subject, rendered: &str) -> AppResult<()> {
    let header = format!(
        "{}\n{} 考试报告 - {}\n{}\n",
        "=".repeat(60),
        subject,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::file_write_failed(path, e))?;

    write!(file, "{}{}\n\n", header, rendered).map_err(|e| AppError::file_write_failed(path, e))?;
    info!("\n报告已保存至: {}", path);
    Ok(())
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefgh", 3), "abc...");
        assert_eq!(truncate_text("接口可以包含字段吗", 4), "接口可以...");
    }

    #[test]
    fn test_append_report() {
        let path = std::env::temp_dir().join(format!("exam_oop_report_{}.txt", std::process::id()));
        let path_str = path.to_string_lossy().to_string();
        let subject = Subject::new(1, "OOP");

        append_report(&path_str, &subject, "first").unwrap();
        append_report(&path_str, &subject, "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(content.matches("OOP (Id=1) 考试报告").count(), 2);
        assert!(content.find("first").unwrap() < content.find("second").unwrap());
    }
}
