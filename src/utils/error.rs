use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    #[error("Usage: {program} <input_file>")]
    Usage { program: String },

    #[error("Error reading file: {path} ({source})")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnagramError {
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// 使用說明不算失敗，其餘錯誤皆以 1 結束
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 0,
            _ => 1,
        }
    }

    /// Whether the message belongs on stdout rather than stderr.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Output(e) => format!("Failed to write output: {}", e),
            Self::Serialization(e) => format!("Failed to render report: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnagramError>;
