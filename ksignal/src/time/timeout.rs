use core::time::Duration;

use super::gettime::get_time_duration;

/// absolute deadline `timeout` from now; None never expires
pub fn timepoint_calc(timeout: Option<Duration>) -> Duration {
    match timeout {
        Some(t) => get_time_duration().saturating_add(t),
        None => Duration::MAX,
    }
}

/// time left until `end`, zero once the deadline has passed
pub fn timepoint_remaining(end: Duration) -> Duration {
    end.saturating_sub(get_time_duration())
}
