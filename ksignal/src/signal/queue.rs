//! bounded signal delivery queue
//!
//! four operations: queue a signal for a task, wait (with timeout) for one
//! of a set, update the caller's block mask, compute the caller's pending
//! set. one spinlock serializes the record pool, the index fifo and every
//! pending/match scan, so the two stay mutually consistent; it is never
//! held across the blocking wait.

use alloc::{sync::Arc, vec::Vec};
use core::time::Duration;

use config::signal::SIG_SET_SIZE;
use include::errno::Errno;
use ksync::{Lazy, SpinLock};

use super::{
    arena::SigArena,
    fifo::IndexFifo,
    readiness::PollSignal,
    sig_info::{SigInfo, SigRecord, SigVal},
    sig_set::{MaskOp, SigSet},
};
use crate::{
    task::{manager::TASK_MANAGER, task::Task, taskid::Tid},
    time::timeout::{timepoint_calc, timepoint_remaining},
    SysResult,
};

/// record pool plus its index fifo; always mutated together, so one lock
/// guards the combined invariant: fifo occupancy == allocated records and
/// fifo order == arrival order
pub(crate) struct SigQueue {
    arena: SigArena,
    fifo: IndexFifo,
}

static SIG_QUEUE: Lazy<SpinLock<SigQueue>> = Lazy::new(|| {
    SpinLock::new(SigQueue {
        arena: SigArena::new(),
        fifo: IndexFifo::new(),
    })
});

/// raised on every enqueue, tagged with the target tid
static SIG_READY: PollSignal = PollSignal::new();

impl SigQueue {
    /// pending set for `tid`: full scan of the queued records, cheap since
    /// occupancy is bounded by the pool capacity
    fn pending_unlocked(&self, tid: Tid) -> SigSet {
        let mut set = SigSet::empty();
        for idx in self.fifo.iter() {
            if let Some(rec) = self.arena.get(idx) {
                if rec.tid == tid {
                    let _ = set.add(rec.signo).inspect_err(|err| {
                        error!("queued signal {} out of range: {:?}", rec.signo, err)
                    });
                }
            }
        }
        set
    }

    /// remove the first entry matching `want`, re-queueing every other
    /// entry in its original relative order; at most one entry is removed
    /// per call
    fn extract_first(&mut self, want: impl Fn(&SigRecord) -> bool) -> Option<u8> {
        let mut found = None;
        for idx in self.fifo.drain() {
            match self.arena.get(idx) {
                Some(rec) if found.is_none() && want(rec) => found = Some(idx),
                _ => self.fifo.push(idx),
            }
        }
        found
    }

    fn dump(&self, tid: Tid) {
        if log_enabled!(log::Level::Debug) {
            if self.fifo.is_empty() {
                debug!("sigq: (empty)");
            } else {
                let slots: Vec<u8> = self.fifo.iter().collect();
                debug!("sigq: {:02x?}", slots);
            }
            debug!("pending: {:x}", self.pending_unlocked(tid));
        }
    }
}

/// locate the queue entry a wait for `candidate` should consume
///
/// pending computation, the eligibility filter and the extraction scan run
/// under a single lock acquisition, so the located entry cannot disappear
/// between being counted as pending and being removed
fn sig_match(task: &Task, candidate: &SigSet) -> Option<u8> {
    let mut queue = SIG_QUEUE.lock();
    let pending = queue.pending_unlocked(task.tid());
    let mask = task.sig_mask();

    debug!("match  : {:x}", candidate);
    debug!("pending: {:x}", pending);
    debug!("mask   : {:x}", mask);

    let eligible = *candidate & pending & !mask;
    if eligible.is_empty() {
        return None;
    }

    // a pending RT signal narrows the scan to the lowest RT number;
    // otherwise any eligible entry is acceptable
    let filter_sig = eligible.lowest_rt();
    let tid = task.tid();
    queue.extract_first(|rec| {
        rec.tid == tid
            && if filter_sig > 0 {
                rec.signo == filter_sig
            } else {
                eligible.has(rec.signo)
            }
    })
}

/// queue `signo` with `value` for the task identified by `target`
///
/// a `signo` of 0 only probes target validity, nothing is delivered.
/// never blocks: a full pool reports EAGAIN to the caller, who is expected
/// to treat it as back-pressure
pub fn sig_queue(current: &Arc<Task>, target: Tid, signo: u32, value: SigVal) -> SysResult<()> {
    if signo > SIG_SET_SIZE {
        debug!("invalid signo {}", signo);
        return Err(Errno::EINVAL);
    }

    let task = TASK_MANAGER.get(target).ok_or_else(|| {
        debug!("no task for tid {}", target);
        Errno::ESRCH
    })?;
    if current.tid() != target && !task.state().is_signalable() {
        debug!("task state {:?} is not signalable", task.state());
        return Err(Errno::ESRCH);
    }

    if signo == 0 {
        // only check whether target is valid, do not deliver
        debug!("tid {} is a valid target", target);
        return Ok(());
    }

    // a task always has access to itself; everyone else needs a grant
    #[cfg(feature = "userspace")]
    if current.tid() != target && !current.has_access(target) {
        error!("tid {} has no access to tid {}", current.tid(), target);
        return Err(Errno::EPERM);
    }

    let mut queue = SIG_QUEUE.lock();
    let Some(pos) = queue.arena.alloc(SigRecord {
        tid: target,
        signo,
        value,
    }) else {
        debug!("no more signal slots to alloc");
        return Err(Errno::EAGAIN);
    };
    queue.fifo.push(pos);
    debug!("tid {}: pushed signal {} for tid {}", current.tid(), signo, target);
    queue.dump(target);

    SIG_READY.raise(target);

    Ok(())
}

impl Task {
    /// wait until a signal in `set` is deliverable to this task
    ///
    /// None waits forever; a zero timeout checks once without blocking.
    /// both the elapsed deadline and the give-up path after a wake that was
    /// tagged for this task but no longer matches anything report EAGAIN
    pub fn sig_timedwait(&self, set: &SigSet, timeout: Option<Duration>) -> SysResult<SigInfo> {
        let end = timepoint_calc(timeout);
        loop {
            if let Some(pos) = sig_match(self, set) {
                return self.sig_consume(pos);
            }

            let remaining = timepoint_remaining(end);
            if SIG_READY.wait(remaining).is_err() {
                debug!("time-out waiting for a signal in {:x}", set);
                return Err(Errno::EAGAIN);
            }

            let (signaled, result) = SIG_READY.check();
            if signaled && result == self.tid() {
                SIG_READY.reset();
                if let Some(pos) = sig_match(self, set) {
                    return self.sig_consume(pos);
                }
                debug!("signaled, but failed to match! result: {}", result);
                return Err(Errno::EAGAIN);
            }

            // raised for some other task: re-check the queue anyway, but
            // leave the flag alone and keep to our own deadline
            if remaining.is_zero() {
                return Err(Errno::EAGAIN);
            }
        }
    }

    /// free the located entry and hand its contents to the caller
    fn sig_consume(&self, pos: u8) -> SysResult<SigInfo> {
        let mut queue = SIG_QUEUE.lock();
        let Some(rec) = queue.arena.take(pos) else {
            error!("matched slot {} is already free", pos);
            return Err(Errno::EAGAIN);
        };
        debug!("tid {}: popped signal {}", self.tid(), rec.signo);
        queue.dump(self.tid());
        Ok(SigInfo::new(rec.signo, rec.value))
    }

    /// pending set for this task, computed on demand from the shared queue
    pub fn sig_pending(&self) -> SigSet {
        SIG_QUEUE.lock().pending_unlocked(self.tid())
    }

    /// update this task's block mask
    ///
    /// the pre-update mask is written through `oset` when present; a None
    /// `set` only queries. masks are never settable on other tasks
    pub fn sig_procmask(
        &self,
        how: MaskOp,
        set: Option<&SigSet>,
        oset: Option<&mut SigSet>,
    ) -> SysResult<()> {
        let mut mask = self.sig_mask_lock().lock();
        if let Some(oset) = oset {
            *oset = *mask;
        }
        let Some(set) = set else {
            return Ok(());
        };
        match how {
            MaskOp::Block => *mask |= *set,
            MaskOp::Unblock => *mask &= !*set,
            MaskOp::SetMask => *mask = *set,
        }
        Ok(())
    }
}
