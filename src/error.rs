use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题目构造错误
    #[error("题目错误: {0}")]
    Question(#[from] QuestionError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 作答输入错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 报告序列化失败
    #[error("报告序列化失败: {0}")]
    Report(#[from] serde_json::Error),
}

/// 题目构造错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// 正确选项编号超出范围 [1, count]
    #[error("正确选项编号 {index} 超出范围 [1, {count}]")]
    OutOfRange { index: i32, count: usize },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 题库中第 `position` 道题无法构造
    #[error("题库 {path} 第 {position} 道题无效: {source}")]
    InvalidQuestion {
        path: String,
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 作答输入错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 输入流已关闭，无法继续作答
    #[error("输入流已关闭")]
    Closed,
    /// 预设答案不足
    #[error("预设答案不足: 第 {number} 题没有答案")]
    Exhausted { number: usize },
    /// 终端读写失败
    #[error("终端读写失败: {0}")]
    Io(#[from] std::io::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建环境变量解析错误
    pub fn env_parse_failed(
        var_name: impl Into<String>,
        value: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.into(),
            value: value.into(),
            expected_type: expected_type.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
