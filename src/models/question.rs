//! 题目模型
//!
//! 判断题与单选题共用同一个 `Question` 结构，以 `QuestionType` 区分。
//! 题目自己负责打分和排序规则，作答编号由考试流程写入。

use crate::error::QuestionError;
use crate::models::answer::Answer;
use std::cmp::Ordering;
use std::fmt;

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// 判断题
    TrueFalse,
    /// 单选题
    Mcq,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::TrueFalse => write!(f, "TrueFalse"),
            QuestionType::Mcq => write!(f, "MCQ"),
        }
    }
}

/// 题目
///
/// 构造后只有 `user_answer_id` 会变化。
#[derive(Debug)]
pub struct Question {
    kind: QuestionType,
    header: String,
    body: String,
    mark: u32,
    answers: Vec<Answer>,
    correct_answer_id: i32,
    user_answer_id: Option<i32>,
}

impl Question {
    /// 创建判断题，固定两个选项：1) True 2) False
    pub fn true_false(
        header: impl Into<String>,
        body: impl Into<String>,
        mark: u32,
        correct_is_true: bool,
    ) -> Self {
        Self {
            kind: QuestionType::TrueFalse,
            header: header.into(),
            body: body.into(),
            mark,
            answers: vec![Answer::new(1, "True"), Answer::new(2, "False")],
            correct_answer_id: if correct_is_true { 1 } else { 2 },
            user_answer_id: None,
        }
    }

    /// 创建单选题
    ///
    /// 选项按给定顺序编号 1..N，`correct_index_1_based` 必须落在 [1, N]。
    pub fn mcq<I, S>(
        header: impl Into<String>,
        body: impl Into<String>,
        mark: u32,
        choices: I,
        correct_index_1_based: i32,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers: Vec<Answer> = choices
            .into_iter()
            .zip(1..)
            .map(|(text, id)| Answer::new(id, text))
            .collect();

        let count = answers.len();
        if correct_index_1_based < 1 || correct_index_1_based as usize > count {
            return Err(QuestionError::OutOfRange {
                index: correct_index_1_based,
                count,
            });
        }

        Ok(Self {
            kind: QuestionType::Mcq,
            header: header.into(),
            body: body.into(),
            mark,
            answers,
            correct_answer_id: correct_index_1_based,
            user_answer_id: None,
        })
    }

    pub fn kind(&self) -> QuestionType {
        self.kind
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn mark(&self) -> u32 {
        self.mark
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn correct_answer_id(&self) -> i32 {
        self.correct_answer_id
    }

    pub fn user_answer_id(&self) -> Option<i32> {
        self.user_answer_id
    }

    /// 记录作答编号，不校验是否对应已有选项
    pub fn set_user_answer(&mut self, answer_id: i32) {
        self.user_answer_id = Some(answer_id);
    }

    /// 正确选项
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.find_answer(self.correct_answer_id)
    }

    /// 作答对应的选项；未作答或编号不存在时为 None
    pub fn user_answer(&self) -> Option<&Answer> {
        self.user_answer_id.and_then(|id| self.find_answer(id))
    }

    fn find_answer(&self, id: i32) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id() == id)
    }

    /// 题目展示数据（题头、分值、题干、全部选项）
    pub fn display(&self) -> QuestionView<'_> {
        QuestionView {
            header: &self.header,
            mark: self.mark,
            body: &self.body,
            answers: &self.answers,
        }
    }

    /// 答对得满分，否则 0 分
    pub fn grade(&self) -> u32 {
        match self.user_answer_id {
            Some(id) if id == self.correct_answer_id => self.mark,
            _ => 0,
        }
    }

    /// 排序规则：分值降序，分值相同按题头升序（忽略大小写）
    pub fn compare_for_ordering(&self, other: &Question) -> Ordering {
        other
            .mark
            .cmp(&self.mark)
            .then_with(|| compare_ignore_case(&self.header, &other.header))
    }
}

/// 复制出的题目保留全部内容，但作答记录清空
impl Clone for Question {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            header: self.header.clone(),
            body: self.body.clone(),
            mark: self.mark,
            answers: self.answers.clone(),
            correct_answer_id: self.correct_answer_id,
            user_answer_id: None,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (Mark={})", self.kind, self.header, self.mark)
    }
}

/// 逐字符转大写后比较
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

/// 忽略大小写判等，规则与题头排序一致
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    compare_ignore_case(a, b) == Ordering::Equal
}

/// 作答时展示给考生的题目
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    pub header: &'a str,
    pub mark: u32,
    pub body: &'a str,
    pub answers: &'a [Answer],
}

impl fmt::Display for QuestionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]  ({} mark)", self.header, self.mark)?;
        write!(f, "{}", self.body)?;
        for answer in self.answers {
            write!(f, "\n{}", answer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mcq() -> Question {
        Question::mcq("MCQ", "Pick one", 5, ["x", "y", "z"], 2).unwrap()
    }

    #[test]
    fn test_true_false_answers() {
        let q = Question::true_false("TF", "Sky is blue", 3, true);
        let ids: Vec<(i32, &str)> = q.answers().iter().map(|a| (a.id(), a.text())).collect();
        assert_eq!(ids, vec![(1, "True"), (2, "False")]);
        assert_eq!(q.correct_answer_id(), 1);
        assert_eq!(q.kind(), QuestionType::TrueFalse);

        let q = Question::true_false("TF", "Sky is green", 3, false);
        assert_eq!(q.correct_answer_id(), 2);
    }

    #[test]
    fn test_mcq_out_of_range() {
        let err = Question::mcq("MCQ", "?", 1, ["x", "y"], 3).unwrap_err();
        assert_eq!(err, QuestionError::OutOfRange { index: 3, count: 2 });

        assert!(Question::mcq("MCQ", "?", 1, ["x", "y"], 0).is_err());
        assert!(Question::mcq("MCQ", "?", 1, ["x", "y"], -1).is_err());
        assert!(Question::mcq("MCQ", "?", 1, Vec::<String>::new(), 1).is_err());

        let q = Question::mcq("MCQ", "?", 1, ["x", "y"], 2).unwrap();
        assert_eq!(q.correct_answer_id(), 2);
        assert_eq!(q.answers()[1], Answer::new(2, "y"));
    }

    #[test]
    fn test_grade_all_cases() {
        let mut q = sample_mcq();
        assert_eq!(q.grade(), 0, "未作答");

        q.set_user_answer(2);
        assert_eq!(q.grade(), 5, "答对");

        q.set_user_answer(1);
        assert_eq!(q.grade(), 0, "答错");

        q.set_user_answer(42);
        assert_eq!(q.grade(), 0, "编号不存在");
        assert!(q.user_answer().is_none());
    }

    #[test]
    fn test_ordering() {
        let b5 = Question::true_false("B", "", 5, true);
        let a10 = Question::true_false("A", "", 10, true);
        let a5 = Question::true_false("a", "", 5, true);

        let mut questions = vec![b5, a10, a5];
        questions.sort_by(Question::compare_for_ordering);

        let order: Vec<(u32, &str)> = questions.iter().map(|q| (q.mark(), q.header())).collect();
        assert_eq!(order, vec![(10, "A"), (5, "a"), (5, "B")]);
    }

    #[test]
    fn test_ordering_ignores_case() {
        let lower = Question::true_false("mcq", "", 5, true);
        let upper = Question::true_false("MCQ", "", 5, true);
        assert_eq!(lower.compare_for_ordering(&upper), Ordering::Equal);

        let tf = Question::true_false("True/False", "", 5, true);
        assert_eq!(upper.compare_for_ordering(&tf), Ordering::Less);
    }

    #[test]
    fn test_clone_resets_user_answer() {
        let mut original = sample_mcq();
        original.set_user_answer(2);

        let mut copy = original.clone();
        assert_eq!(copy.header(), original.header());
        assert_eq!(copy.body(), original.body());
        assert_eq!(copy.mark(), original.mark());
        assert_eq!(copy.answers(), original.answers());
        assert_eq!(copy.correct_answer_id(), original.correct_answer_id());
        assert_eq!(copy.kind(), original.kind());
        assert_eq!(copy.user_answer_id(), None);

        copy.set_user_answer(1);
        assert_eq!(original.user_answer_id(), Some(2));
    }

    #[test]
    fn test_display_view() {
        let q = Question::true_false("True/False", "Interfaces can contain fields.", 5, false);
        assert_eq!(
            q.display().to_string(),
            "[True/False]  (5 mark)\nInterfaces can contain fields.\n1) True\n2) False"
        );
        assert_eq!(q.to_string(), "TrueFalse: True/False (Mark=5)");
    }
}
