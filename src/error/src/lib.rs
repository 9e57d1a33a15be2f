//! 战斗演示的错误处理模块
//!
//! Core combat math never fails: damage is clamped, not rejected. Errors only
//! come from the checked constructors that accept untrusted signed input and
//! from rendering reports for the caller.

use thiserror::Error;

/// Errors raised at the edges of the simulation
#[derive(Debug, Error)]
pub enum GameError {
    /// A caller supplied a value the model cannot hold (negative stat, empty name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GameError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GameError::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::SerializationError(err.to_string())
    }
}

/// Rejects negative values coming from signed sources.
pub fn non_negative(field: &str, value: i64) -> Result<u32, GameError> {
    if value < 0 {
        return Err(GameError::invalid(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| GameError::invalid(format!("{field} is out of range: {value}")))
}

/// Rejects blank names.
pub fn non_blank(field: &str, value: &str) -> Result<(), GameError> {
    if value.trim().is_empty() {
        Err(GameError::invalid(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InvalidArgument(msg) => format!("Rejected input: {}", msg),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::BrokenPipe => "Output stream closed".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to write output".to_string(),
            _ => format!("IO error: {}", e),
        },
        GameError::SerializationError(msg) => format!("Could not render report: {}", msg),
    }
}
