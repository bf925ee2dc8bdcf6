//! 终端交互
//!
//! 负责读取原始输入并解析为整数，解析失败时重新提示；
//! 考试核心只接收解析好的编号。

use crate::error::{AppResult, InputError};
use crate::models::exam::{AnswerSource, ExamKind, ExamOverview};
use crate::models::question::QuestionView;
use std::io::{BufRead, Write};
use tracing::debug;

const ANSWER_PROMPT: &str = "Your answer (enter choice number): ";
const EXAM_TYPE_PROMPT: &str = "please enter the type of Exam(1 for practical ||2 for final: ";
const INVALID_INPUT: &str = "Invalid input. Try again.";

/// 从终端读取作答
pub struct ConsoleAnswerSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleAnswerSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 取回内部的读写端
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsoleAnswerSource<R, W> {
    fn start(&mut self, overview: &ExamOverview) -> AppResult<()> {
        writeln!(self.writer, "{}", overview).map_err(InputError::from)?;
        Ok(())
    }

    fn answer(&mut self, number: usize, question: &QuestionView<'_>) -> AppResult<i32> {
        writeln!(self.writer, "\nQ{}.", number).map_err(InputError::from)?;
        writeln!(self.writer, "{}", question).map_err(InputError::from)?;
        Ok(read_int(&mut self.reader, &mut self.writer, ANSWER_PROMPT)?)
    }
}

/// 询问考试类型：1 为练习，其他整数为期末
pub fn prompt_exam_type<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> AppResult<ExamKind> {
    let choice = read_int(reader, writer, EXAM_TYPE_PROMPT)?;
    Ok(if choice == 1 {
        ExamKind::Practical
    } else {
        ExamKind::Final
    })
}

/// 循环提示直到读到一个整数
fn read_int<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<i32, InputError> {
    let mut line = String::new();
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }

        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("无法解析输入 '{}': {}", line.trim(), e);
                writeln!(writer, "{}", INVALID_INPUT)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::exam::{Exam, SubjectRef};
    use crate::models::question::Question;
    use std::io::Cursor;

    fn exam() -> Exam {
        let mut exam = Exam::new(
            ExamKind::Final,
            SubjectRef {
                id: 7,
                name: "OOP".to_string(),
            },
        );
        exam.add_question(Question::true_false("TF", "Rust has a GC.", 5, false));
        exam
    }

    #[test]
    fn test_reprompts_until_integer() {
        let mut exam = exam();
        let input = Cursor::new("abc\n\n 2 \n");
        let mut source = ConsoleAnswerSource::new(input, Vec::new());

        exam.run(&mut source).unwrap();
        assert_eq!(exam.questions()[0].user_answer_id(), Some(2));

        let (_, output) = source.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("=== FinalExam for OOP ==="));
        assert!(output.contains("Q1.\n[TF]  (5 mark)\nRust has a GC.\n1) True\n2) False"));
        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        assert_eq!(output.matches(ANSWER_PROMPT).count(), 3);
    }

    #[test]
    fn test_closed_input() {
        let mut exam = exam();
        let mut source = ConsoleAnswerSource::new(Cursor::new("x\n"), Vec::new());
        let err = exam.run(&mut source).unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::Closed)));
    }

    #[test]
    fn test_prompt_exam_type() {
        let mut out = Vec::new();
        let kind = prompt_exam_type(&mut Cursor::new("1\n"), &mut out).unwrap();
        assert_eq!(kind, ExamKind::Practical);

        let kind = prompt_exam_type(&mut Cursor::new("nope\n2\n"), &mut out).unwrap();
        assert_eq!(kind, ExamKind::Final);

        let kind = prompt_exam_type(&mut Cursor::new("5\n"), &mut out).unwrap();
        assert_eq!(kind, ExamKind::Final);
    }
}
