//! # Task
//!
//! the slice of the thread object the signal core needs: an identity, the
//! scheduler-visible state word, and the per-task block mask

#[cfg(feature = "userspace")]
use alloc::collections::btree_set::BTreeSet;
use alloc::sync::Arc;

use bitflags::bitflags;
use ksync::SpinLock;

use super::{
    manager::TASK_MANAGER,
    taskid::{tid_alloc, Tid},
};
use crate::signal::sig_set::SigSet;

bitflags! {
    /// scheduler-visible task state bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TaskState: u32 {
        /// blocked on some wait object
        const PENDING = 1 << 1;
        /// will never run again
        const DEAD = 1 << 3;
        /// suspended until explicitly resumed
        const SUSPENDED = 1 << 4;
        /// sitting in a run queue
        const QUEUED = 1 << 7;
    }
}

impl TaskState {
    /// states in which a task may be the target of someone else's signal
    pub fn is_signalable(self) -> bool {
        self.intersects(TaskState::PENDING | TaskState::SUSPENDED | TaskState::QUEUED)
    }
}

/// - usage: wrap it in Arc<Task>, create through [`Task::spawn`]
pub struct Task {
    tid: Tid,
    state: SpinLock<TaskState>,
    /// signals excluded from matching (not from queueing)
    sig_mask: SpinLock<SigSet>,
    /// tids this task is allowed to queue signals to
    #[cfg(feature = "userspace")]
    grants: SpinLock<BTreeSet<Tid>>,
}

impl Task {
    /// create a task and register it with the manager
    pub fn spawn(state: TaskState) -> Arc<Self> {
        let task = Arc::new(Self {
            tid: tid_alloc(),
            state: SpinLock::new(state),
            sig_mask: SpinLock::new(SigSet::empty()),
            #[cfg(feature = "userspace")]
            grants: SpinLock::new(BTreeSet::new()),
        });
        TASK_MANAGER.insert(&task);
        task
    }

    /// tid
    pub fn tid(&self) -> Tid {
        self.tid
    }

    /// state
    pub fn state(&self) -> TaskState {
        *self.state.lock()
    }
    pub fn set_state(&self, state: TaskState) {
        *self.state.lock() = state;
    }

    /// sig_mask
    pub fn sig_mask(&self) -> SigSet {
        *self.sig_mask.lock()
    }
    pub fn set_sig_mask(&self, mask: SigSet) {
        *self.sig_mask.lock() = mask;
    }
    pub(crate) fn sig_mask_lock(&self) -> &SpinLock<SigSet> {
        &self.sig_mask
    }

    #[cfg(feature = "userspace")]
    pub fn grant_access(&self, target: Tid) {
        self.grants.lock().insert(target);
    }
    #[cfg(feature = "userspace")]
    pub fn has_access(&self, target: Tid) -> bool {
        self.grants.lock().contains(&target)
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        TASK_MANAGER.remove(self.tid);
    }
}
