use core::time::Duration;

use include::errno::Errno;
use ksync::SpinLock;

use crate::{
    time::{
        gettime::relax,
        timeout::{timepoint_calc, timepoint_remaining},
    },
    SysResult,
};

#[derive(Debug, Clone, Copy)]
struct PollState {
    signaled: bool,
    result: usize,
}

/// single waitable flag shared by every signal waiter
///
/// raised on each enqueue, tagged with the target tid. level-triggered:
/// wait returns immediately as long as the flag stays raised, so every
/// waiter wakes on every insertion and has to re-filter
pub struct PollSignal {
    state: SpinLock<PollState>,
}

impl PollSignal {
    pub const fn new() -> Self {
        Self {
            state: SpinLock::new(PollState {
                signaled: false,
                result: 0,
            }),
        }
    }

    /// raise the flag; a second raise before a reset overwrites the tag
    pub fn raise(&self, result: usize) {
        let mut state = self.state.lock();
        state.signaled = true;
        state.result = result;
    }

    pub fn check(&self) -> (bool, usize) {
        let state = self.state.lock();
        (state.signaled, state.result)
    }

    pub fn reset(&self) {
        self.state.lock().signaled = false;
    }

    /// block until the flag is raised or `limit` elapses
    ///
    /// spins through [`relax`], so the embedder decides whether an
    /// iteration yields, halts the core, or just burns it
    pub fn wait(&self, limit: Duration) -> SysResult<()> {
        let end = timepoint_calc(Some(limit));
        loop {
            if self.state.lock().signaled {
                return Ok(());
            }
            if timepoint_remaining(end).is_zero() {
                return Err(Errno::EAGAIN);
            }
            relax();
        }
    }
}
