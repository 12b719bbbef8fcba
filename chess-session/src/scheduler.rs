//! 延时任务调度
//!
//! 所有"并发"都是定时续延：引擎应答与视图重放以延时任务挂起，
//! 每个任务都持有可取消句柄，开新局或整体重置时统一中止，
//! 避免上一局遗留的回调改写已被取代的会话。

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// 已调度任务的可取消句柄
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// 延时 `delay` 后执行 `body`
    pub fn schedule<F>(delay: Duration, body: F) -> ScheduledTask
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            body.await;
        });
        ScheduledTask { handle }
    }

    /// 中止任务（已完成的任务中止无副作用）
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// 任务是否已经执行完毕
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// 未决任务集合
#[derive(Debug, Default)]
pub struct PendingTasks {
    tasks: Vec<ScheduledTask>,
}

impl PendingTasks {
    /// 登记新任务，顺带清理已完成的句柄
    pub fn push(&mut self, task: ScheduledTask) {
        self.tasks.retain(|t| !t.is_finished());
        self.tasks.push(task);
    }

    /// 中止并清空全部未决任务
    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }

    /// 未决任务数量（含刚完成、尚未清理的句柄）
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
