//! 错误类型定义

use thiserror::Error;

/// 协议错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// 无效的坐标文本
    #[error("Invalid square: {text:?}")]
    InvalidSquare { text: String },

    /// FEN 缺少走子方标记（既无 ` w ` 也无 ` b `）
    #[error("FEN missing active color token: {fen:?}")]
    MissingActiveColor { fen: String },

    /// 引擎回复超出协议约定，双方已失步
    #[error("Engine protocol violation in {operation}: {reply:?}")]
    EngineDesync {
        operation: &'static str,
        reply: String,
    },
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
