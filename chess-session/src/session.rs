//! 会话编排
//!
//! 单个 [`Session`] 对象持有权威游戏状态，居中协调人类走子、
//! 引擎应答调度、终局监测与致命失步处理。状态只在单次回调内
//! 同步变更；挂起点只有已调度的视图重放与引擎应答两类延时任务。

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use protocol::{
    Color, MoveEngine, MoveReply, ProtocolError, SearchReply, Square, INITIAL_FEN,
};

use crate::config::SessionConfig;
use crate::monitor::EndGameMonitor;
use crate::scheduler::{PendingTasks, ScheduledTask};
use crate::state::{GameState, LifecyclePhase};
use crate::view::{BoardView, MoveOutcome, Notifier};

/// 会话句柄
///
/// 可廉价克隆，所有克隆共享同一份状态；延时任务各持一个克隆。
#[derive(Clone)]
pub struct Session {
    shared: Arc<SessionShared>,
}

struct SessionShared {
    state: Mutex<GameState>,
    pending: Mutex<PendingTasks>,
    engine: Arc<dyn MoveEngine>,
    view: Arc<dyn BoardView>,
    notifier: Arc<dyn Notifier>,
    monitor: EndGameMonitor,
    config: SessionConfig,
}

impl Session {
    /// 创建会话（尚未开局）
    pub fn new(
        engine: Arc<dyn MoveEngine>,
        view: Arc<dyn BoardView>,
        notifier: Arc<dyn Notifier>,
        config: SessionConfig,
    ) -> Session {
        let monitor = EndGameMonitor::new(engine.clone(), notifier.clone());
        Session {
            shared: Arc::new(SessionShared {
                state: Mutex::new(GameState::new()),
                pending: Mutex::new(PendingTasks::default()),
                engine,
                view,
                notifier,
                monitor,
                config,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, GameState> {
        self.shared.state.lock().expect("会话状态锁被污染")
    }

    fn pending(&self) -> MutexGuard<'_, PendingTasks> {
        self.shared.pending.lock().expect("任务集合锁被污染")
    }

    /// 当前权威 FEN
    pub fn current_fen(&self) -> String {
        self.state().current_fen().to_string()
    }

    /// 当前走子方
    pub fn turn_owner(&self) -> Option<Color> {
        self.state().turn_owner()
    }

    /// 当前生命周期阶段
    pub fn phase(&self) -> LifecyclePhase {
        self.state().phase()
    }

    /// 开始新对局
    ///
    /// 先中止上一局遗留的全部延时任务再重置状态，保证过期回调
    /// 不会改写新会话。玩家执黑时引擎先行，首着带较长延时。
    pub fn new_game(&self, human_side: Color) {
        self.pending().cancel_all();
        let generation = {
            let mut state = self.state();
            state.start(human_side);
            state.generation()
        };
        tracing::info!("新对局开始, 玩家执{:?}", human_side);

        self.shared.view.set_orientation(human_side);
        self.shared.view.set_position(INITIAL_FEN);
        self.shared.view.clear_position_panels();

        if human_side == Color::Black {
            self.schedule_engine_move(
                INITIAL_FEN.to_string(),
                self.shared.config.opening_delay(),
                generation,
            );
        }
    }

    /// 处理人类拖放走子
    ///
    /// 返回 [`MoveOutcome::Snapback`] 时视图应把棋子弹回原格；
    /// 除引擎接受走法外，本调用不改动任何状态。
    pub fn submit_move(&self, from: Square, to: Square) -> MoveOutcome {
        let (fen, generation) = {
            let state = self.state();
            if state.phase() != LifecyclePhase::InProgress {
                tracing::debug!("对局未进行, 走子忽略");
                return MoveOutcome::Snapback;
            }
            if !state.is_human_turn() {
                tracing::debug!("未轮到玩家, 回弹");
                return MoveOutcome::Snapback;
            }
            if state.awaiting_reply() {
                // 上一着的视图重放与引擎应答是一个不可中断的整体
                tracing::debug!("引擎应答在途, 回弹");
                return MoveOutcome::Snapback;
            }
            (state.current_fen().to_string(), state.generation())
        };

        let raw = self
            .shared
            .engine
            .make_move(&fen, &from.to_string(), &to.to_string());
        match MoveReply::decode(&raw) {
            MoveReply::Rejected => {
                // 可恢复：不改状态，只让视图回弹
                tracing::debug!("走法被拒绝: {} -> {}", from, to);
                MoveOutcome::Snapback
            }
            MoveReply::Violation => {
                self.panic(ProtocolError::EngineDesync {
                    operation: "make_move",
                    reply: raw,
                });
                MoveOutcome::Snapback
            }
            MoveReply::Accepted(new_fen) => {
                tracing::debug!("走法被接受: {} -> {}", from, to);
                if let Err(e) = self.record_human_fen(&new_fen) {
                    self.panic(e);
                    return MoveOutcome::Snapback;
                }
                self.state().set_awaiting_reply(true);
                self.schedule_resync_then_reply(new_fen.clone(), generation);
                self.run_end_game_check(&new_fen);
                MoveOutcome::Accepted
            }
        }
    }

    /// 请求走子建议（非阻塞）
    ///
    /// 引擎先替玩家落下建议的一着，稍后再走出对方的应着，回合
    /// 重新回到玩家手中。两着在同一任务内顺序执行。
    pub fn suggest_move(&self) {
        let generation = {
            let mut state = self.state();
            if !state.is_human_turn() || state.awaiting_reply() {
                tracing::debug!("当前不可请求建议");
                return;
            }
            // 建议的两着与人类走子互斥：从登记那一刻起就算应答在途，
            // 任务执行前落下的拖放一律回弹
            state.set_awaiting_reply(true);
            state.generation()
        };

        let session = self.clone();
        let reply_delay = self.shared.config.reply_delay();
        let task = ScheduledTask::schedule(Duration::ZERO, async move {
            // 第一着：替玩家执行建议走法
            let Some(fen) = session.live_fen(generation) else {
                return;
            };
            session.execute_engine_move(&fen);

            // 第二着：对方应着
            tokio::time::sleep(reply_delay).await;
            let Some(fen) = session.live_fen(generation) else {
                return;
            };
            session.execute_engine_move(&fen);
        });
        self.pending().push(task);
    }

    /// 致命失步处理
    ///
    /// 唯一的致命路径：引擎回复一旦越出协议，两侧的 FEN 协议已
    /// 失步，编排层无法再做局部推理，只能通知用户并丢弃全部对局
    /// 状态。没有重试。
    pub fn panic(&self, error: ProtocolError) {
        tracing::error!("会话失步, 整体重置: {}", error);
        self.shared.notifier.fatal_error(&error.to_string());
        self.state().reset();
        self.shared.view.clear_position_panels();
        self.shared.view.set_position(INITIAL_FEN);
        self.pending().cancel_all();
    }

    /// 调度一次引擎走子（开局首着、建议走子用）
    fn schedule_engine_move(&self, fen: String, delay: Duration, generation: u64) {
        let session = self.clone();
        let task = ScheduledTask::schedule(delay, async move {
            if session.live_fen(generation).is_none() {
                return;
            }
            session.execute_engine_move(&fen);
        });
        self.pending().push(task);
    }

    /// 调度人类走子之后的视图重放与引擎应答
    ///
    /// 两步在同一任务内顺序链接：重放先落地（覆盖视图落子后的
    /// 默认重绘，保住升变/易位的副作用），应答随后触发，不依赖
    /// 两个同延时定时器的注册顺序。
    fn schedule_resync_then_reply(&self, fen: String, generation: u64) {
        let session = self.clone();
        let resync_delay = self.shared.config.resync_delay();
        let reply_delay = self.shared.config.reply_delay();
        let task = ScheduledTask::schedule(resync_delay, async move {
            // 对局已结束时仍要重放（终局一着也可能带升变/易位），
            // 只有被新对局取代时才整体放弃
            if session.state().generation() != generation {
                return;
            }
            session.shared.view.set_position(&fen);

            tokio::time::sleep(reply_delay).await;
            if session.live_fen(generation).is_none() {
                return;
            }
            session.execute_engine_move(&fen);
        });
        self.pending().push(task);
    }

    /// 任务唤醒后的存活检查：代数一致且对局进行中才返回当前 FEN
    fn live_fen(&self, generation: u64) -> Option<String> {
        let state = self.state();
        if state.generation() == generation && state.phase() == LifecyclePhase::InProgress {
            Some(state.current_fen().to_string())
        } else {
            None
        }
    }

    /// 执行一次引擎走子（在已调度任务内同步完成）
    fn execute_engine_move(&self, fen: &str) {
        let raw = self.shared.engine.find_best_move(fen);
        match SearchReply::decode(&raw) {
            SearchReply::Violation => {
                self.panic(ProtocolError::EngineDesync {
                    operation: "find_best_move",
                    reply: raw,
                });
            }
            SearchReply::Accepted(new_fen) => {
                if let Err(e) = self.record_engine_fen(&new_fen) {
                    self.panic(e);
                    return;
                }
                // 此刻没有落子重绘在途，直接应用即可
                self.shared.view.set_position(&new_fen);
                self.state().set_awaiting_reply(false);
                self.run_end_game_check(&new_fen);
            }
        }
    }

    /// 记录人类一着的新 FEN，成功后刷新玩家侧局面面板
    fn record_human_fen(&self, fen: &str) -> protocol::Result<()> {
        self.state().record_fen(fen)?;
        self.shared.view.show_human_position(fen);
        Ok(())
    }

    /// 记录引擎一着的新 FEN，成功后刷新引擎侧局面面板
    fn record_engine_fen(&self, fen: &str) -> protocol::Result<()> {
        self.state().record_fen(fen)?;
        self.shared.view.show_engine_position(fen);
        Ok(())
    }

    /// 每一着之后无条件运行终局监测
    fn run_end_game_check(&self, fen: &str) {
        match self.shared.monitor.check_and_report(fen) {
            Ok(None) => {}
            Ok(Some(_)) => self.state().finish(),
            Err(e) => self.panic(e),
        }
    }
}
