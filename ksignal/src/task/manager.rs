use alloc::{
    collections::btree_map::BTreeMap,
    sync::{Arc, Weak},
};

use ksync::SpinLock;

use super::{task::Task, taskid::Tid};

pub struct TaskManager(SpinLock<BTreeMap<Tid, Weak<Task>>>);

impl TaskManager {
    pub const fn new() -> Self {
        TaskManager(SpinLock::new(BTreeMap::new()))
    }

    /// insert a task
    pub fn insert(&self, task: &Arc<Task>) {
        self.0.lock().insert(task.tid(), Arc::downgrade(task));
    }

    /// remove a task by tid
    pub fn remove(&self, tid: Tid) {
        self.0.lock().remove(&tid);
    }

    /// try to get a task by tid
    pub fn get(&self, tid: Tid) -> Option<Arc<Task>> {
        self.0.lock().get(&tid).and_then(|weak| weak.upgrade())
    }
}

pub static TASK_MANAGER: TaskManager = TaskManager::new();
