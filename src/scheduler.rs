//! Single-threaded task scheduling for the game loop.
//!
//! All waits (damage cooldown, chest reveal, level fade, enemy redirect
//! cadence) are scheduled tasks that fire from `tick`, never blocking
//! sleeps. Tasks carry owner ids, not references; the level checks owner
//! liveness when applying a due task, so a task outliving its entity
//! fires as a no-op.

/// Handle for cancelling a scheduled task.
pub type TaskId = u64;

/// What a due task asks the level to do. Owners are referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Pick a new wander direction for an enemy.
    EnemyRedirect(usize),
    /// End the player's post-hit invulnerability window.
    DamageCooldown,
    /// Finish a chest's one-shot reveal effect.
    ChestReveal(usize),
    /// Complete the level-exit fade.
    LevelFade,
}

#[derive(Debug, Clone)]
struct Entry {
    id: TaskId,
    remaining: f64,
    repeat: Option<f64>,
    task: Task,
}

/// One-shot and repeating timers driven by the frame delta.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: TaskId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a one-shot task.
    pub fn after(&mut self, delay: f64, task: Task) -> TaskId {
        self.push(delay, None, task)
    }

    /// Schedules a repeating task with the given interval.
    pub fn every(&mut self, interval: f64, task: Task) -> TaskId {
        self.push(interval, Some(interval), task)
    }

    fn push(&mut self, delay: f64, repeat: Option<f64>, task: Task) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            remaining: delay,
            repeat,
            task,
        });
        id
    }

    /// Removes a pending task. Cancelling an already-fired or unknown id
    /// is a no-op.
    pub fn cancel(&mut self, id: TaskId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Advances all timers and returns due tasks in schedule order.
    /// Repeating tasks fire at most once per tick and are rearmed.
    pub fn tick(&mut self, dt: f64) -> Vec<Task> {
        let mut due = Vec::new();
        for entry in &mut self.entries {
            entry.remaining -= dt;
            if entry.remaining <= 0.0 {
                due.push(entry.task);
                if let Some(interval) = entry.repeat {
                    entry.remaining = interval;
                }
            }
        }
        self.entries
            .retain(|e| e.repeat.is_some() || e.remaining > 0.0);
        due
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut sched = Scheduler::new();
        sched.after(0.5, Task::LevelFade);

        assert!(sched.tick(0.3).is_empty());
        assert_eq!(sched.tick(0.3), vec![Task::LevelFade]);
        assert!(sched.tick(10.0).is_empty());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_repeating_rearms() {
        let mut sched = Scheduler::new();
        sched.every(2.0, Task::EnemyRedirect(0));

        assert!(sched.tick(1.9).is_empty());
        assert_eq!(sched.tick(0.2), vec![Task::EnemyRedirect(0)]);
        assert!(sched.tick(1.0).is_empty());
        assert_eq!(sched.tick(1.1), vec![Task::EnemyRedirect(0)]);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_cancel_pending_task() {
        let mut sched = Scheduler::new();
        let id = sched.after(0.5, Task::DamageCooldown);
        sched.cancel(id);
        assert!(sched.tick(1.0).is_empty());
    }

    #[test]
    fn test_cancel_unknown_id_is_noop() {
        let mut sched = Scheduler::new();
        sched.after(0.5, Task::DamageCooldown);
        sched.cancel(999);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_due_tasks_in_schedule_order() {
        let mut sched = Scheduler::new();
        sched.after(0.1, Task::ChestReveal(0));
        sched.after(0.2, Task::ChestReveal(1));
        assert_eq!(
            sched.tick(0.5),
            vec![Task::ChestReveal(0), Task::ChestReveal(1)]
        );
    }
}
