//! 走法引擎调用约定
//!
//! 引擎是外部协作方，通过三个纯同步的字符串进/字符串出操作接入。
//! 调用按宿主函数建模，不设超时，也不会挂起。

/// 走法引擎
///
/// 引擎对会话无状态：每次调用只收到 FEN 副本，返回带标签的
/// 字符串回复，由 [`MoveReply`]、[`SearchReply`]、[`EndGameReply`]
/// 在边界处一次性解码。
///
/// [`MoveReply`]: crate::MoveReply
/// [`SearchReply`]: crate::SearchReply
/// [`EndGameReply`]: crate::EndGameReply
pub trait MoveEngine: Send + Sync {
    /// 从给定局面计算引擎的一着，返回走完之后的新 FEN
    fn find_best_move(&self, fen: &str) -> String;

    /// 校验并执行一步走法，返回走完之后的新 FEN
    ///
    /// 走法不合规时返回 `illegal`，输入超出协议时返回 `illegal_input`。
    fn make_move(&self, fen: &str, from: &str, to: &str) -> String;

    /// 判定对局是否结束以及结束方式
    fn check_end_game(&self, fen: &str) -> String;
}
