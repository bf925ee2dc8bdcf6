use serde::Serialize;
use std::fmt;

/// 选项（编号 + 文本），构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    id: i32,
    text: String,
}

impl Answer {
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Answer::new(3, ":").to_string(), "3) :");
        assert_eq!(Answer::new(1, "").to_string(), "1) ");
    }
}
