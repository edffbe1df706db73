//! Linux error number: https://man7.org/linux/man-pages/man3/errno.3.html

use thiserror::Error;

#[repr(i32)]
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[allow(dead_code)]
pub enum Errno {
    /// Operation not permitted.
    #[error("[EPERM] Operation not permitted")]
    EPERM = 1,

    /// No such process.
    #[error("[ESRCH] No such process")]
    ESRCH = 3,

    /// Interrupted system call.
    #[error("[EINTR] Interrupted system call")]
    EINTR = 4,

    /// Try again.
    #[error("[EAGAIN] Try again")]
    EAGAIN = 11,

    /// Out of memory.
    #[error("[ENOMEM] Out of memory")]
    ENOMEM = 12,

    /// Permission denied.
    #[error("[EACCES] Permission denied")]
    EACCES = 13,

    /// Bad address.
    #[error("[EFAULT] Bad address")]
    EFAULT = 14,

    /// Device or resource busy.
    #[error("[EBUSY] Device or resource busy")]
    EBUSY = 16,

    /// File exists.
    #[error("[EEXIST] File exists")]
    EEXIST = 17,

    /// Invalid argument.
    #[error("[EINVAL] Invalid argument")]
    EINVAL = 22,

    /// Function not supported.
    #[error("[ENOSYS] Function not supported")]
    ENOSYS = 38,

    /// Value too large to be stored in data type.
    #[error("[EOVERFLOW] Value too large to be stored in data type")]
    EOVERFLOW = 75,

    /// Connection timed out.
    #[error("[ETIMEDOUT] Connection timed out")]
    ETIMEDOUT = 110,

    /// Operation canceled.
    #[error("[ECANCELED] Operation canceled")]
    ECANCELED = 125,
}

impl Errno {
    /// raw errno value as returned through a syscall boundary
    pub fn raw(self) -> i32 {
        self as i32
    }
}
