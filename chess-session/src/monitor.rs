//! 终局监测
//!
//! 每一着之后（无论出自玩家还是引擎）都要分类一次当前局面。

use std::sync::Arc;

use protocol::{EndGameReply, GameVerdict, MoveEngine, ProtocolError};

use crate::view::Notifier;

/// 终局监测器
pub struct EndGameMonitor {
    engine: Arc<dyn MoveEngine>,
    notifier: Arc<dyn Notifier>,
}

impl EndGameMonitor {
    /// 创建监测器
    pub fn new(engine: Arc<dyn MoveEngine>, notifier: Arc<dyn Notifier>) -> EndGameMonitor {
        EndGameMonitor { engine, notifier }
    }

    /// 分类给定局面并在终局时通知用户
    ///
    /// `Ok(None)` 表示对局继续，对同一局面重复调用不会产生重复
    /// 通知。分类是穷尽式的：越出约定形状的回复作为协议违例返回
    /// 错误，由调用方走致命路径。
    pub fn check_and_report(&self, fen: &str) -> Result<Option<GameVerdict>, ProtocolError> {
        let raw = self.engine.check_end_game(fen);
        match EndGameReply::decode(&raw) {
            EndGameReply::Ongoing => Ok(None),
            EndGameReply::Over(verdict) => {
                tracing::info!("对局结束: {}", verdict);
                self.notifier.game_over(verdict);
                Ok(Some(verdict))
            }
            EndGameReply::Violation => Err(ProtocolError::EngineDesync {
                operation: "check_end_game",
                reply: raw,
            }),
        }
    }
}
