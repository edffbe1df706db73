pub mod arena;
pub mod fifo;
pub mod queue;
pub mod readiness;
pub mod sig_info;
pub mod sig_set;

pub use sig_info::{SigInfo, SigVal};
pub use sig_set::{MaskOp, SigSet};
