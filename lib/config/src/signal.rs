//! signal delivery configs

/// number of representable signal numbers, 1-indexed;
/// signal 0 is reserved as the "no signal" probe value
pub const SIG_SET_SIZE: u32 = 64;

/// capacity of the queued-signal pool and of the index fifo;
/// slot indices are single bytes, so 256 is the hard ceiling
pub const SIG_QUEUE_SIZE: usize = 32;

/// first real-time signal number
pub const SIG_RTMIN: u32 = 33;

/// count of real-time signal numbers, band is [SIG_RTMIN, SIG_RTMIN + SIG_NUM_RT)
pub const SIG_NUM_RT: u32 = 32;

const _: () = assert!(SIG_QUEUE_SIZE > 0, "signal queue capacity is too small");
const _: () = assert!(SIG_QUEUE_SIZE <= 256, "signal queue capacity is too large");
const _: () = assert!(SIG_RTMIN + SIG_NUM_RT - 1 <= SIG_SET_SIZE);
