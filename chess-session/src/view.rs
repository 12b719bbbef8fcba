//! 棋盘视图与用户通知协作方
//!
//! 视图负责拖放手势与渲染，通知方负责用户可见的提示；两者对
//! 会话均无状态，只接收 FEN 副本，从不持有会话引用。

use protocol::{Color, GameVerdict};

/// 人类拖放走子的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 走子被接受，权威局面已更新
    Accepted,
    /// 走子被拒绝，视图应把棋子弹回原格
    Snapback,
}

/// 棋盘视图（外部协作方）
pub trait BoardView: Send + Sync {
    /// 设置棋盘朝向（玩家执子方在下）
    fn set_orientation(&self, side: Color);

    /// 按 FEN 重绘整个棋盘
    fn set_position(&self, fen: &str);

    /// 更新玩家侧的最新局面面板
    fn show_human_position(&self, fen: &str);

    /// 更新引擎侧的最新局面面板
    fn show_engine_position(&self, fen: &str);

    /// 清空双侧局面面板（开新局/整体重置时）
    fn clear_position_panels(&self);
}

/// 用户通知（外部协作方）
pub trait Notifier: Send + Sync {
    /// 对局结束通知（和棋或将杀）
    fn game_over(&self, verdict: GameVerdict);

    /// 不可恢复故障通知（会话即将整体重置）
    fn fatal_error(&self, message: &str);
}
