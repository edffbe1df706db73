use core::sync::atomic::{AtomicUsize, Ordering};

pub type Tid = usize;

// tid 0 is never handed out, it stays usable as a "nobody" tag
static TID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// allocate the next task id, never reused
pub fn tid_alloc() -> Tid {
    TID_COUNTER.fetch_add(1, Ordering::Relaxed)
}
