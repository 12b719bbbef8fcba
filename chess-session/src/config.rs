//! 会话时序设置
//!
//! 提供三个延时参数的配置、默认值与 JSON 持久化。

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 人类落子后视图重放的默认延时（毫秒）
pub const DEFAULT_RESYNC_DELAY_MS: u64 = 100;

/// 引擎应答相对视图重放的默认追加延时（毫秒）
pub const DEFAULT_REPLY_DELAY_MS: u64 = 100;

/// 执黑开局时引擎首着的默认延时（毫秒）
pub const DEFAULT_OPENING_DELAY_MS: u64 = 1000;

/// 会话时序配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 人类落子后视图重放延时（毫秒）
    ///
    /// 重放必须晚于视图自身的落子默认重绘，否则升变/易位的
    /// 副作用会被重绘盖掉。
    pub resync_delay_ms: u64,
    /// 引擎应答相对视图重放的追加延时（毫秒）
    pub reply_delay_ms: u64,
    /// 执黑开局时引擎首着延时（毫秒），等初始棋盘渲染安定，
    /// 也给玩家一个可感知的轮换节奏
    pub opening_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            resync_delay_ms: DEFAULT_RESYNC_DELAY_MS,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            opening_delay_ms: DEFAULT_OPENING_DELAY_MS,
        }
    }
}

impl SessionConfig {
    /// 视图重放延时
    pub fn resync_delay(&self) -> Duration {
        Duration::from_millis(self.resync_delay_ms)
    }

    /// 引擎应答追加延时
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// 开局引擎首着延时
    pub fn opening_delay(&self) -> Duration {
        Duration::from_millis(self.opening_delay_ms)
    }

    /// 从 JSON 文件加载，任何失败都回退默认值
    pub fn load_or_default(path: &Path) -> SessionConfig {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("设置文件解析失败, 使用默认值: {}", e);
                    SessionConfig::default()
                }
            },
            Err(e) => {
                tracing::debug!("设置文件不可读, 使用默认值: {}", e);
                SessionConfig::default()
            }
        }
    }

    /// 保存为 JSON 文件
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)
    }
}
