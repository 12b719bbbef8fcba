//! 引擎回复解码
//!
//! 走法引擎的三个操作均返回带标签的字符串；此处在边界处一次性
//! 解码为显式结果类型，会话层不再接触原始哨兵。
//!
//! 终局分类是穷尽式的：不在约定形状之内的回复一律视为协议违例，
//! 没有"未知则忽略"的分支。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{
    REPLY_CHECKMATE_BLACK, REPLY_CHECKMATE_WHITE, REPLY_DRAW, REPLY_ILLEGAL,
    REPLY_ILLEGAL_INPUT, REPLY_NONE,
};

/// `make_move` 的回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReply {
    /// 走法被接受，携带走完这一着之后的新 FEN
    Accepted(String),
    /// 走法被拒绝（可恢复，棋盘回弹）
    Rejected,
    /// 协议违例（不可恢复）
    Violation,
}

impl MoveReply {
    /// 解码 `make_move` 的原始回复
    pub fn decode(raw: &str) -> MoveReply {
        match raw {
            REPLY_ILLEGAL => MoveReply::Rejected,
            REPLY_ILLEGAL_INPUT => {
                tracing::warn!("make_move 返回协议违例哨兵");
                MoveReply::Violation
            }
            fen => MoveReply::Accepted(fen.to_string()),
        }
    }
}

/// `find_best_move` 的回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchReply {
    /// 引擎走完一着之后的新 FEN
    Accepted(String),
    /// 协议违例（不可恢复）
    Violation,
}

impl SearchReply {
    /// 解码 `find_best_move` 的原始回复
    pub fn decode(raw: &str) -> SearchReply {
        match raw {
            REPLY_ILLEGAL_INPUT => {
                tracing::warn!("find_best_move 返回协议违例哨兵");
                SearchReply::Violation
            }
            fen => SearchReply::Accepted(fen.to_string()),
        }
    }
}

/// 终局结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVerdict {
    /// 和棋
    Draw,
    /// 将杀，携带胜方
    Checkmate(Color),
}

impl fmt::Display for GameVerdict {
    /// 与线上回复同形（`draw` / `checkmate white` / `checkmate black`）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVerdict::Draw => f.write_str("draw"),
            GameVerdict::Checkmate(winner) => {
                write!(f, "checkmate {}", winner.display_name())
            }
        }
    }
}

/// `check_end_game` 的回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndGameReply {
    /// 对局继续
    Ongoing,
    /// 对局结束
    Over(GameVerdict),
    /// 协议违例（含一切未识别的形状）
    Violation,
}

impl EndGameReply {
    /// 解码 `check_end_game` 的原始回复
    pub fn decode(raw: &str) -> EndGameReply {
        match raw {
            REPLY_NONE => EndGameReply::Ongoing,
            REPLY_DRAW => EndGameReply::Over(GameVerdict::Draw),
            REPLY_CHECKMATE_WHITE => EndGameReply::Over(GameVerdict::Checkmate(Color::White)),
            REPLY_CHECKMATE_BLACK => EndGameReply::Over(GameVerdict::Checkmate(Color::Black)),
            other => {
                tracing::warn!("check_end_game 回复形状未识别: {:?}", other);
                EndGameReply::Violation
            }
        }
    }
}
