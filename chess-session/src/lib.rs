//! 国际象棋会话编排层
//!
//! 在棋盘视图（拖放 + 渲染）与走法引擎（合法性校验、搜索、
//! 终局判定）两个外部协作方之间维护唯一的权威局面：
//! - 以 FEN 字符串记录局面，走子方标记决定回合归属
//! - 居中处理人类走子并调度引擎应答
//! - 每一着之后做终局监测
//! - 引擎回复越出协议时视为失步，通知用户并整体重置会话

mod config;
mod monitor;
mod scheduler;
mod session;
mod state;
mod view;

pub use config::{
    SessionConfig, DEFAULT_OPENING_DELAY_MS, DEFAULT_REPLY_DELAY_MS, DEFAULT_RESYNC_DELAY_MS,
};
pub use monitor::EndGameMonitor;
pub use scheduler::{PendingTasks, ScheduledTask};
pub use session::Session;
pub use state::{GameState, LifecyclePhase};
pub use view::{BoardView, MoveOutcome, Notifier};
