pub mod manager;
pub mod task;
pub mod taskid;

pub use task::{Task, TaskState};
pub use taskid::Tid;
