use core::time::Duration;

use crate_interface::call_interface;

/// monotonic clock and wait-loop pacing, provided by the embedder
#[crate_interface::def_interface]
pub trait TimeIf: Send + Sync {
    /// monotonic duration since boot
    fn now() -> Duration;

    /// called once per readiness-wait spin iteration
    fn relax();
}

pub fn get_time_duration() -> Duration {
    call_interface!(TimeIf::now())
}

pub fn relax() {
    call_interface!(TimeIf::relax())
}
