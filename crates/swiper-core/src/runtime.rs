use crate::clock::{Clock, SystemClock};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type TaskId = u64;

struct TaskEntry {
    id: TaskId,
    deadline_millis: u64,
    task: Option<Box<dyn FnOnce() + 'static>>,
}

struct RuntimeInner {
    clock: Rc<dyn Clock>,
    tasks: RefCell<Vec<TaskEntry>>,
    next_task_id: Cell<u64>,
}

impl RuntimeInner {
    fn schedule_after(&self, delay_millis: u64, task: Box<dyn FnOnce() + 'static>) -> TaskId {
        let id = self.next_task_id.get();
        self.next_task_id.set(id + 1);
        let deadline_millis = self.clock.now_millis().saturating_add(delay_millis);
        self.tasks.borrow_mut().push(TaskEntry {
            id,
            deadline_millis,
            task: Some(task),
        });
        log::debug!("scheduled task {id} at {deadline_millis}ms");
        id
    }

    fn cancel_task(&self, id: TaskId) -> bool {
        let mut tasks = self.tasks.borrow_mut();
        if let Some(index) = tasks.iter().position(|entry| entry.id == id) {
            tasks.remove(index);
            log::debug!("cancelled task {id}");
            true
        } else {
            false
        }
    }

    fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.borrow().iter().any(|entry| entry.id == id)
    }

    fn run_due_tasks(&self) -> usize {
        let now = self.clock.now_millis();
        let mut due = {
            let mut tasks = self.tasks.borrow_mut();
            let mut due = Vec::new();
            let mut index = 0;
            while index < tasks.len() {
                if tasks[index].deadline_millis <= now {
                    due.push(tasks.remove(index));
                } else {
                    index += 1;
                }
            }
            due
        };
        // Tasks may schedule more work, so the queue borrow is released first.
        due.sort_by_key(|entry| (entry.deadline_millis, entry.id));
        let mut ran = 0;
        for mut entry in due {
            if let Some(task) = entry.task.take() {
                task();
                ran += 1;
            }
        }
        ran
    }

    fn next_deadline(&self) -> Option<u64> {
        self.tasks
            .borrow()
            .iter()
            .map(|entry| entry.deadline_millis)
            .min()
    }
}

/// Owner of the clock and the delayed task queue.
///
/// Hosts call [`Runtime::run_due_tasks`] from their event loop; nothing here
/// spawns threads or timers of its own.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                clock: Rc::new(clock),
                tasks: RefCell::new(Vec::new()),
                next_task_id: Cell::new(1),
            }),
        }
    }

    pub fn with_system_clock() -> Self {
        Self::new(SystemClock::new())
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.inner.clock.now_millis()
    }

    /// Runs every task whose deadline has passed, earliest first.
    ///
    /// Returns the number of tasks that ran.
    pub fn run_due_tasks(&self) -> usize {
        self.inner.run_due_tasks()
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.inner.tasks.borrow().is_empty()
    }

    /// Deadline of the earliest pending task, for hosts that arm a real timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.inner.next_deadline()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("now_millis", &self.now_millis())
            .field("pending_tasks", &self.inner.tasks.borrow().len())
            .finish()
    }
}

/// Weak handle to a [`Runtime`]. Every operation is a no-op once the runtime
/// has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn now_millis(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.clock.now_millis())
            .unwrap_or(0)
    }

    /// Schedules `task` to run `delay_millis` from now.
    ///
    /// Dropping the returned registration cancels the task; call
    /// [`TaskRegistration::detach`] to let it fire regardless.
    pub fn schedule_after(
        &self,
        delay_millis: u64,
        task: impl FnOnce() + 'static,
    ) -> TaskRegistration {
        match self.inner.upgrade() {
            Some(inner) => {
                let id = inner.schedule_after(delay_millis, Box::new(task));
                TaskRegistration {
                    runtime: self.clone(),
                    id: Some(id),
                }
            }
            None => TaskRegistration {
                runtime: self.clone(),
                id: None,
            },
        }
    }

    pub fn cancel_task(&self, id: TaskId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.cancel_task(id))
            .unwrap_or(false)
    }

    fn is_task_pending(&self, id: TaskId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_pending(id))
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

/// Keeps a scheduled task alive. Cancels it on drop.
#[derive(Debug)]
pub struct TaskRegistration {
    runtime: RuntimeHandle,
    id: Option<TaskId>,
}

impl TaskRegistration {
    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// True while the task is queued and has neither run nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.id
            .is_some_and(|id| self.runtime.is_task_pending(id))
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_task(id);
        }
    }

    /// Releases the registration without cancelling the task.
    pub fn detach(mut self) -> Option<TaskId> {
        self.id.take()
    }
}

impl Drop for TaskRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_task(id);
        }
    }
}
