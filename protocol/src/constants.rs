//! 协议常量定义

/// 棋盘列数
pub const BOARD_FILES: usize = 8;

/// 棋盘行数
pub const BOARD_RANKS: usize = 8;

/// 引擎哨兵：走法被拒绝（可恢复，提示玩家重走）
pub const REPLY_ILLEGAL: &str = "illegal";

/// 引擎哨兵：协议违例（不可恢复，两侧 FEN 协议已失步）
pub const REPLY_ILLEGAL_INPUT: &str = "illegal_input";

/// 终局判定：对局继续
pub const REPLY_NONE: &str = "none";

/// 终局判定：和棋
pub const REPLY_DRAW: &str = "draw";

/// 终局判定：白方将杀
pub const REPLY_CHECKMATE_WHITE: &str = "checkmate white";

/// 终局判定：黑方将杀
pub const REPLY_CHECKMATE_BLACK: &str = "checkmate black";
