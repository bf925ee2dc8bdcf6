use crate::error::{AppError, AppResult};
use crate::models::exam::ExamKind;
use std::str::FromStr;

/// 报告输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(()),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 科目编号
    pub subject_id: i32,
    /// 科目名称
    pub subject_name: String,
    /// 考试类型；为空时在终端询问
    pub exam_type: Option<ExamKind>,
    /// 题库文件；为空时使用内置题目
    pub question_file: Option<String>,
    /// 预设答案；为空时在终端作答
    pub scripted_answers: Option<Vec<i32>>,
    /// 报告格式
    pub report_format: ReportFormat,
    /// 报告追加写入的文件
    pub report_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_id: 101,
            subject_name: "OOP_C#".to_string(),
            exam_type: None,
            question_file: None,
            scripted_answers: None,
            report_format: ReportFormat::Text,
            report_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值来源构建配置，便于测试
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let subject_id = match non_empty("SUBJECT_ID") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| AppError::env_parse_failed("SUBJECT_ID", &v, "i32"))?,
            None => default.subject_id,
        };

        let report_format = match non_empty("REPORT_FORMAT") {
            Some(v) => v
                .parse()
                .map_err(|_| AppError::env_parse_failed("REPORT_FORMAT", &v, "text|json"))?,
            None => default.report_format,
        };

        let verbose_logging = match non_empty("VERBOSE_LOGGING") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| AppError::env_parse_failed("VERBOSE_LOGGING", &v, "bool"))?,
            None => default.verbose_logging,
        };

        let scripted_answers = match non_empty("EXAM_ANSWERS") {
            Some(v) => Some(parse_answer_list(&v)?),
            None => None,
        };

        Ok(Self {
            subject_id,
            subject_name: non_empty("SUBJECT_NAME").unwrap_or(default.subject_name),
            exam_type: non_empty("EXAM_TYPE").map(|v| ExamKind::parse_loose(v.trim())),
            question_file: non_empty("QUESTION_FILE"),
            scripted_answers,
            report_format,
            report_file: non_empty("REPORT_FILE"),
            verbose_logging,
        })
    }
}

/// 解析逗号分隔的作答编号，如 "3,1,3"
fn parse_answer_list(value: &str) -> AppResult<Vec<i32>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| AppError::env_parse_failed("EXAM_ANSWERS", value, "逗号分隔的整数"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.subject_id, 101);
        assert_eq!(config.subject_name, "OOP_C#");
        assert_eq!(config.exam_type, None);
        assert_eq!(config.report_format, ReportFormat::Text);
        assert!(config.scripted_answers.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SUBJECT_ID", "7"),
            ("SUBJECT_NAME", "OOP"),
            ("EXAM_TYPE", "Final"),
            ("EXAM_ANSWERS", "3, 1,3"),
            ("REPORT_FORMAT", "JSON"),
            ("VERBOSE_LOGGING", "true"),
        ])
        .unwrap();
        assert_eq!(config.subject_id, 7);
        assert_eq!(config.subject_name, "OOP");
        assert_eq!(config.exam_type, Some(ExamKind::Final));
        assert_eq!(config.scripted_answers, Some(vec![3, 1, 3]));
        assert_eq!(config.report_format, ReportFormat::Json);
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_unknown_exam_type_is_practical() {
        let config = config_from(&[("EXAM_TYPE", "midterm")]).unwrap();
        assert_eq!(config.exam_type, Some(ExamKind::Practical));
    }

    #[test]
    fn test_malformed_values() {
        assert!(config_from(&[("SUBJECT_ID", "abc")]).is_err());
        assert!(config_from(&[("REPORT_FORMAT", "xml")]).is_err());
        assert!(config_from(&[("EXAM_ANSWERS", "1,two")]).is_err());

        let err = config_from(&[("VERBOSE_LOGGING", "yes")]).unwrap_err();
        assert!(err.to_string().contains("VERBOSE_LOGGING"));
    }
}
