use crate::models::exam::{Exam, ExamKind, SubjectRef};
use std::fmt;
use tracing::info;

/// 科目，最多持有一场考试
#[derive(Debug)]
pub struct Subject {
    id: i32,
    name: String,
    exam: Option<Exam>,
}

impl Subject {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exam: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exam(&self) -> Option<&Exam> {
        self.exam.as_ref()
    }

    pub fn exam_mut(&mut self) -> Option<&mut Exam> {
        self.exam.as_mut()
    }

    /// 创建考试
    ///
    /// `exam_type` 忽略大小写等于 "final" 时创建期末考试，其他任何值都创建练习考试。
    /// 已有的考试会被替换。
    pub fn create_exam(&mut self, exam_type: &str) -> &mut Exam {
        let kind = ExamKind::parse_loose(exam_type);
        info!("📝 为科目 {} 创建 {} (输入: '{}')", self, kind, exam_type);

        let subject = SubjectRef {
            id: self.id,
            name: self.name.clone(),
        };
        self.exam.insert(Exam::new(kind, subject))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Id={})", self.name, self.id)
    }
}
