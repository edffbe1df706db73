use alloc::vec::Vec;

use config::signal::SIG_QUEUE_SIZE;
use ringbuffer::{ConstGenericRingBuffer, RingBuffer, RingBufferExt, RingBufferRead, RingBufferWrite};

/// arrival-ordered fifo of arena slot indices
///
/// occupancy always equals the number of allocated records; the two are
/// only ever mutated together under the queue lock
pub struct IndexFifo(ConstGenericRingBuffer<u8, SIG_QUEUE_SIZE>);

impl IndexFifo {
    pub fn new() -> Self {
        Self(ConstGenericRingBuffer::new())
    }

    /// append at the tail; capacity is the arena's, so a successful alloc
    /// guarantees room
    pub fn push(&mut self, idx: u8) {
        self.0.enqueue(idx);
    }

    /// take out every queued index, front to back
    pub fn drain(&mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len());
        while let Some(idx) = self.0.dequeue() {
            out.push(idx);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IndexFifo {
    fn default() -> Self {
        Self::new()
    }
}
