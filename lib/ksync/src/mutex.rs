//! spin mutex for the signal subsystem
//!
//! The lock vocabulary is kept behind these aliases so an embedder can swap
//! in a lock with IRQ discipline (disable on acquire, restore on release)
//! without touching the users.

pub type SpinLock<T> = spin::Mutex<T>;
pub type SpinLockGuard<'a, T> = spin::MutexGuard<'a, T>;
