//! 链路层错误类型定义

use thiserror::Error;

/// 链路层统一错误类型
#[derive(Error, Debug)]
pub enum LinkError {
    /// 尚未连接
    #[error("Not connected to the arm")]
    NotConnected,

    /// 总线不可用
    #[error("Bus unavailable: {0}")]
    Bus(String),

    /// 字段取值非法
    #[error("Invalid value {value:#04x} for {field}")]
    InvalidValue { field: &'static str, value: u8 },

    /// 指令被后端拒绝
    #[error("Command rejected: {0}")]
    Rejected(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
