#![no_std]

pub mod mutex;

pub use mutex::{SpinLock, SpinLockGuard};
pub use spin::{Lazy, Once};
