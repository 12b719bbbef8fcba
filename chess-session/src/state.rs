//! 会话游戏状态

use protocol::{Color, Fen, ProtocolError, INITIAL_FEN};

/// 对局生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// 尚未开局
    Fresh,
    /// 对局进行中
    InProgress,
    /// 对局已结束（等待开新局）
    Over,
}

/// 会话游戏状态
///
/// 整个会话唯一的可变权威记录。`position` 始终带有走子方标记，
/// 该标记是回合归属的唯一依据。
#[derive(Debug, Clone)]
pub struct GameState {
    /// 当前权威局面（FEN）
    position: String,
    /// 玩家执子方（开局时确定，换局前不变）
    human_side: Color,
    /// 生命周期阶段
    phase: LifecyclePhase,
    /// 视图重放/引擎应答是否在途（在途期间拒绝新的人类走子）
    awaiting_reply: bool,
    /// 对局代数，每次开新局或重置时递增；
    /// 延时任务唤醒后核对代数，过期则放弃执行
    generation: u64,
}

impl GameState {
    /// 创建未开局的状态
    pub fn new() -> GameState {
        GameState {
            position: INITIAL_FEN.to_string(),
            human_side: Color::White,
            phase: LifecyclePhase::Fresh,
            awaiting_reply: false,
            generation: 0,
        }
    }

    /// 开始新对局
    pub fn start(&mut self, human_side: Color) {
        self.generation += 1;
        self.position = INITIAL_FEN.to_string();
        self.human_side = human_side;
        self.phase = LifecyclePhase::InProgress;
        self.awaiting_reply = false;
    }

    /// 整体重置（致命失步后丢弃全部对局状态）
    pub fn reset(&mut self) {
        self.generation += 1;
        self.position = INITIAL_FEN.to_string();
        self.phase = LifecyclePhase::Fresh;
        self.awaiting_reply = false;
    }

    /// 记录新的权威 FEN
    ///
    /// 唯一的本地校验是走子方标记必须存在；完整语法校验由走法
    /// 引擎负责——记录进来的 FEN 要么是初始局面，要么出自引擎回复。
    pub fn record_fen(&mut self, fen: &str) -> protocol::Result<()> {
        if !Fen::has_active_color(fen) {
            return Err(ProtocolError::MissingActiveColor {
                fen: fen.to_string(),
            });
        }
        self.position = fen.to_string();
        Ok(())
    }

    /// 当前权威 FEN
    pub fn current_fen(&self) -> &str {
        &self.position
    }

    /// 当前走子方（扫描走子方标记）
    pub fn turn_owner(&self) -> Option<Color> {
        Fen::active_color(&self.position)
    }

    /// 是否轮到玩家走子
    pub fn is_human_turn(&self) -> bool {
        self.phase == LifecyclePhase::InProgress && self.turn_owner() == Some(self.human_side)
    }

    /// 对局结束
    pub fn finish(&mut self) {
        self.phase = LifecyclePhase::Over;
        self.awaiting_reply = false;
    }

    /// 玩家执子方
    pub fn human_side(&self) -> Color {
        self.human_side
    }

    /// 生命周期阶段
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// 引擎应答是否在途
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// 标记引擎应答在途状态
    pub fn set_awaiting_reply(&mut self, awaiting: bool) {
        self.awaiting_reply = awaiting;
    }

    /// 当前对局代数
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
