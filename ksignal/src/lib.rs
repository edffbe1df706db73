//! signal delivery subsystem for a real-time kernel
//!
//! a bounded pool of queued (target, signo, value) records, per-task block
//! masks, and a wait-with-timeout primitive built on one shared readiness
//! flag. [`signal`] holds the set type and the queue/wait core, [`task`]
//! the slice of the thread object the core needs, [`time`] the monotonic
//! clock seam and deadline helpers.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[macro_use]
extern crate log;

pub mod signal;
pub mod task;
pub mod time;

pub use include::errno::Errno;
pub use signal::{
    queue::sig_queue,
    sig_info::{SigInfo, SigVal},
    sig_set::{MaskOp, SigSet},
};
pub use task::{manager::TASK_MANAGER, task::{Task, TaskState}, taskid::Tid};

/// result of every operation in this crate
pub type SysResult<T> = Result<T, Errno>;

#[cfg(test)]
mod test_hal {
    use core::time::Duration;
    use std::{sync::OnceLock, thread, time::Instant};

    use crate::time::gettime::TimeIf;

    struct HostTime;

    #[crate_interface::impl_interface]
    impl TimeIf for HostTime {
        fn now() -> Duration {
            static BOOT: OnceLock<Instant> = OnceLock::new();
            BOOT.get_or_init(Instant::now).elapsed()
        }

        fn relax() {
            thread::yield_now();
        }
    }
}
