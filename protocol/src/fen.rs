//! FEN 走子方解析
//!
//! 国际象棋 FEN 格式：
//! `<棋盘> <走子方> <易位权> <过路兵> <半回合数> <回合数>`
//!
//! 示例：
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`
//!
//! 本层只关心走子方标记：完整语法校验由走法引擎负责——
//! 记录进会话的每个 FEN 要么是初始局面，要么出自引擎回复。

use crate::color::Color;

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN 走子方处理
pub struct Fen;

impl Fen {
    /// 扫描走子方标记（` w ` 或 ` b `），两者皆有时取靠前者
    ///
    /// 该扫描是回合归属的唯一依据。
    pub fn active_color(fen: &str) -> Option<Color> {
        let white_at = fen.find(" w ");
        let black_at = fen.find(" b ");
        match (white_at, black_at) {
            (Some(w), Some(b)) => Some(if w < b { Color::White } else { Color::Black }),
            (Some(_), None) => Some(Color::White),
            (None, Some(_)) => Some(Color::Black),
            (None, None) => None,
        }
    }

    /// 是否带有走子方标记
    ///
    /// 这是记录 FEN 前的唯一本地校验。
    pub fn has_active_color(fen: &str) -> bool {
        Self::active_color(fen).is_some()
    }

    /// 棋盘摆放部分（第一个空格之前）
    pub fn placement(fen: &str) -> &str {
        fen.split_whitespace().next().unwrap_or(fen)
    }
}
