//! 国际象棋会话共享协议库
//!
//! 包含:
//! - 阵营、坐标等核心数据结构
//! - FEN 走子方解析
//! - 走法引擎调用约定 (MoveEngine trait)
//! - 引擎回复解码 (MoveReply, SearchReply, EndGameReply)

mod color;
mod constants;
mod engine;
mod error;
mod fen;
mod reply;
mod square;

pub use color::Color;
pub use constants::*;
pub use engine::MoveEngine;
pub use error::{ProtocolError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use reply::{EndGameReply, GameVerdict, MoveReply, SearchReply};
pub use square::Square;
