//! 考试模型
//!
//! ## 生命周期
//!
//! 1. 由 `Subject::create_exam` 创建
//! 2. `add_question` 追加题目
//! 3. `run` 先排序，再逐题向 `AnswerSource` 要一个作答编号
//! 4. `show_exam` 按考试类型生成报告
//!
//! 流程不做状态校验，可以重复运行；分数永远按当前作答计算。

use crate::error::{AppResult, InputError};
use crate::models::answer::Answer;
use crate::models::question::{eq_ignore_case, Question, QuestionView};
use crate::models::report::{
    ExamReport, FinalItem, FinalReport, PracticalItem, PracticalReport, NOT_AVAILABLE,
};
use std::fmt;
use tracing::{debug, info};

/// 考试类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamKind {
    /// 练习：考后公布正确答案
    Practical,
    /// 期末：考后逐题回顾作答与得分
    Final,
}

impl ExamKind {
    /// 默认时长（分钟）
    pub fn default_time_in_minutes(self) -> u32 {
        match self {
            ExamKind::Practical => 30,
            ExamKind::Final => 120,
        }
    }

    /// "final"（忽略大小写）为期末，其余一律为练习
    pub fn parse_loose(s: &str) -> Self {
        if eq_ignore_case(s, "final") {
            ExamKind::Final
        } else {
            ExamKind::Practical
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Practical => write!(f, "PracticalExam"),
            ExamKind::Final => write!(f, "FinalExam"),
        }
    }
}

/// 所属科目的标识（值拷贝，不持有科目）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRef {
    pub id: i32,
    pub name: String,
}

/// 开考前展示的概要
#[derive(Debug, Clone)]
pub struct ExamOverview {
    pub kind: ExamKind,
    pub subject_name: String,
    pub time_in_minutes: u32,
    pub number_of_questions: usize,
}

impl fmt::Display for ExamOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} for {} ===", self.kind, self.subject_name)?;
        writeln!(
            f,
            "Time: {} minutes  |  Questions: {}",
            self.time_in_minutes, self.number_of_questions
        )?;
        write!(f, "{}", "-".repeat(50))
    }
}

/// 作答来源
///
/// 负责把原始输入解析成整数，解析失败时自行重试；
/// 考试只保存返回的编号，不检查它是否存在。
pub trait AnswerSource {
    /// 开考通知
    fn start(&mut self, _overview: &ExamOverview) -> AppResult<()> {
        Ok(())
    }

    /// 第 `number` 题（从1开始）的作答编号
    fn answer(&mut self, number: usize, question: &QuestionView<'_>) -> AppResult<i32>;
}

/// 预设答案，按排序后的题目顺序依次给出
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: std::vec::IntoIter<i32>,
}

impl ScriptedAnswers {
    pub fn new(answers: Vec<i32>) -> Self {
        Self {
            answers: answers.into_iter(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(&mut self, number: usize, _question: &QuestionView<'_>) -> AppResult<i32> {
        self.answers
            .next()
            .ok_or_else(|| InputError::Exhausted { number }.into())
    }
}

/// 考试
#[derive(Debug)]
pub struct Exam {
    kind: ExamKind,
    time_in_minutes: u32,
    questions: Vec<Question>,
    subject: SubjectRef,
}

impl Exam {
    /// 使用该类型的默认时长创建考试
    pub fn new(kind: ExamKind, subject: SubjectRef) -> Self {
        Self {
            kind,
            time_in_minutes: kind.default_time_in_minutes(),
            questions: Vec::new(),
            subject,
        }
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    /// 仅用于展示，不限制作答时间
    pub fn time_in_minutes(&self) -> u32 {
        self.time_in_minutes
    }

    pub fn subject(&self) -> &SubjectRef {
        &self.subject
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn number_of_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn add_question(&mut self, question: Question) {
        debug!("添加题目: {}", question);
        self.questions.push(question);
    }

    /// 原地排序：分值降序，题头升序
    pub fn sort_questions(&mut self) {
        self.questions.sort_by(Question::compare_for_ordering);
    }

    pub fn overview(&self) -> ExamOverview {
        ExamOverview {
            kind: self.kind,
            subject_name: self.subject.name.clone(),
            time_in_minutes: self.time_in_minutes,
            number_of_questions: self.questions.len(),
        }
    }

    /// 排序后逐题收集作答
    ///
    /// 作答来源报错时立即返回，已作答的题目保留编号。
    pub fn run(&mut self, source: &mut dyn AnswerSource) -> AppResult<()> {
        self.sort_questions();
        source.start(&self.overview())?;

        for (idx, question) in self.questions.iter_mut().enumerate() {
            let number = idx + 1;
            let answer_id = source.answer(number, &question.display())?;
            debug!("[题目 {}] 作答编号: {}", number, answer_id);
            question.set_user_answer(answer_id);
        }

        info!(
            "✓ {} 作答完成，共 {} 题",
            self.kind,
            self.questions.len()
        );
        Ok(())
    }

    /// 总得分，按 u64 累加
    pub fn calculate_total_grade(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.grade())).sum()
    }

    /// 满分，按 u64 累加
    pub fn total_marks(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.mark())).sum()
    }

    /// 生成考后报告，格式取决于考试类型
    pub fn show_exam(&self) -> ExamReport {
        match self.kind {
            ExamKind::Practical => ExamReport::Practical(self.practical_report()),
            ExamKind::Final => ExamReport::Final(self.final_report()),
        }
    }

    fn practical_report(&self) -> PracticalReport {
        let items = self
            .questions
            .iter()
            .enumerate()
            .map(|(idx, q)| PracticalItem {
                number: idx + 1,
                body: q.body().to_string(),
                choices: q.answers().to_vec(),
                correct_answer: answer_text(q.correct_answer()),
            })
            .collect();

        PracticalReport {
            items,
            total_grade: self.calculate_total_grade(),
            total_marks: self.total_marks(),
        }
    }

    fn final_report(&self) -> FinalReport {
        let items = self
            .questions
            .iter()
            .enumerate()
            .map(|(idx, q)| FinalItem {
                number: idx + 1,
                body: q.body().to_string(),
                mark: q.mark(),
                choices: q.answers().to_vec(),
                user_answer: answer_text(q.user_answer()),
                correct_answer: answer_text(q.correct_answer()),
                earned: q.grade(),
            })
            .collect();

        FinalReport {
            items,
            total_grade: self.calculate_total_grade(),
            total_marks: self.total_marks(),
        }
    }
}

fn answer_text(answer: Option<&Answer>) -> String {
    answer
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
