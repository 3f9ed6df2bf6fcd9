//! In-memory task storage implementation
//!
//! Tasks live in a vector in creation order, with an ID -> position index
//! for constant-time lookup. Nothing is persisted.

use std::collections::HashMap;

use super::model::{Task, TaskId, TaskPriority};
use super::repository::{TaskFilter, TaskRepository};
use crate::{Error, Result};

/// In-memory task store
#[derive(Debug)]
pub struct TaskStore {
    /// Tasks in creation order
    tasks: Vec<Task>,
    /// Position of each task in `tasks`
    index: HashMap<TaskId, usize>,
    /// Next ID to hand out; never decremented
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store whose first task gets ID 1
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// ID the next `add` will assign
    pub fn next_id(&self) -> TaskId {
        TaskId::new(self.next_id)
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, task) in self.tasks.iter().enumerate() {
            self.index.insert(task.id(), position);
        }
    }
}

impl TaskRepository for TaskStore {
    fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.tasks.push(Task::new(id, title, description, priority));
        self.index.insert(id, self.tasks.len() - 1);
        self.next_id += 1;

        tracing::debug!(%id, priority = priority.label(), "task added");
        id
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.index.get(&id).map(|&position| &self.tasks[position])
    }

    fn complete(&mut self, id: TaskId) -> Result<()> {
        let Some(&position) = self.index.get(&id) else {
            tracing::debug!(%id, "complete: task not found");
            return Err(Error::TaskNotFound(id));
        };

        self.tasks[position].mark_completed();
        tracing::debug!(%id, "task completed");
        Ok(())
    }

    fn delete(&mut self, id: TaskId) -> Result<Task> {
        let Some(position) = self.index.remove(&id) else {
            tracing::debug!(%id, "delete: task not found");
            return Err(Error::TaskNotFound(id));
        };

        let task = self.tasks.remove(position);
        // Every task after `position` shifted down by one.
        self.rebuild_index();

        tracing::debug!(%id, remaining = self.tasks.len(), "task deleted");
        Ok(task)
    }

    fn list(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id().get()).collect()
    }

    fn create_test_store(count: usize) -> TaskStore {
        let mut store = TaskStore::new();
        for i in 1..=count {
            store.add(format!("Task {}", i), "desc", TaskPriority::Medium);
        }
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), TaskId::new(1));
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut store = TaskStore::new();
        let mut previous = 0;
        for i in 0..20 {
            let id = store.add(format!("t{}", i), "", TaskPriority::from_code(i)).get();
            assert!(id > previous);
            previous = id;
        }
        assert_eq!(store.len(), 20);
        assert_eq!(store.next_id(), TaskId::new(21));
    }

    #[test]
    fn test_get_task() {
        let mut store = TaskStore::new();
        let id = store.add("Write report", "quarterly", TaskPriority::High);

        let task = store.get(id).unwrap();
        assert_eq!(task.title(), "Write report");
        assert_eq!(task.description(), "quarterly");
        assert_eq!(task.priority(), TaskPriority::High);

        assert!(store.get(TaskId::new(99)).is_none());
    }

    #[test]
    fn test_add_accepts_empty_text() {
        let mut store = TaskStore::new();
        let id = store.add("", "", TaskPriority::Low);
        assert_eq!(store.get(id).unwrap().title(), "");
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut store = create_test_store(2);
        let id = TaskId::new(1);

        store.complete(id).unwrap();
        assert_eq!(store.get(id).unwrap().status(), TaskStatus::Completed);

        store.complete(id).unwrap();
        assert_eq!(store.get(id).unwrap().status(), TaskStatus::Completed);
        assert_eq!(
            store.get(TaskId::new(2)).unwrap().status(),
            TaskStatus::Pending
        );
    }

    #[test]
    fn test_complete_nonexistent_task() {
        let mut store = create_test_store(2);
        let before: Vec<Task> = store.list_all().into_iter().cloned().collect();

        let result = store.complete(TaskId::new(7));
        match result {
            Err(Error::TaskNotFound(id)) => assert_eq!(id, TaskId::new(7)),
            other => panic!("Expected TaskNotFound error, got: {:?}", other),
        }

        let after: Vec<Task> = store.list_all().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_keeps_other_ids_resolvable() {
        let mut store = create_test_store(5);

        let removed = store.delete(TaskId::new(2)).unwrap();
        assert_eq!(removed.title(), "Task 2");
        assert_eq!(store.len(), 4);
        assert!(store.get(TaskId::new(2)).is_none());

        for n in [1, 3, 4, 5] {
            let task = store.get(TaskId::new(n)).unwrap();
            assert_eq!(task.id(), TaskId::new(n));
            assert_eq!(task.title(), format!("Task {}", n));
        }

        // Operations after a delete must hit the right task.
        store.complete(TaskId::new(4)).unwrap();
        assert!(store.get(TaskId::new(4)).unwrap().is_completed());
        assert!(!store.get(TaskId::new(5)).unwrap().is_completed());
        assert!(!store.get(TaskId::new(3)).unwrap().is_completed());
    }

    #[test]
    fn test_delete_first_and_last() {
        let mut store = create_test_store(3);
        store.delete(TaskId::new(1)).unwrap();
        store.delete(TaskId::new(3)).unwrap();

        assert_eq!(ids(&store.list_all()), vec![2]);
        assert_eq!(store.get(TaskId::new(2)).unwrap().title(), "Task 2");
    }

    #[test]
    fn test_delete_nonexistent_task() {
        let mut store = create_test_store(3);
        let before: Vec<Task> = store.list_all().into_iter().cloned().collect();

        let result = store.delete(TaskId::new(10));
        assert_eq!(result.unwrap_err(), Error::TaskNotFound(TaskId::new(10)));

        let after: Vec<Task> = store.list_all().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = create_test_store(2);
        store.delete(TaskId::new(2)).unwrap();
        store.delete(TaskId::new(1)).unwrap();
        assert!(store.is_empty());

        let id = store.add("fresh", "", TaskPriority::Low);
        assert_eq!(id, TaskId::new(3));
    }

    #[test]
    fn test_completed_task_can_be_deleted() {
        let mut store = create_test_store(2);
        store.complete(TaskId::new(1)).unwrap();
        let removed = store.delete(TaskId::new(1)).unwrap();
        assert!(removed.is_completed());
        assert!(store.list_completed().is_empty());
    }

    #[test]
    fn test_filters_partition_all_tasks() {
        let mut store = create_test_store(6);
        for n in [2, 3, 6] {
            store.complete(TaskId::new(n)).unwrap();
        }
        store.delete(TaskId::new(3)).unwrap();

        let all = ids(&store.list_all());
        let pending = ids(&store.list_pending());
        let completed = ids(&store.list_completed());

        assert_eq!(all, vec![1, 2, 4, 5, 6]);
        assert_eq!(pending, vec![1, 4, 5]);
        assert_eq!(completed, vec![2, 6]);
        assert!(pending.iter().all(|id| !completed.contains(id)));

        let mut union = [pending, completed].concat();
        union.sort_unstable();
        assert_eq!(union, all);
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(TaskFilter::All.empty_message(), "No tasks available.");
        assert_eq!(TaskFilter::Pending.empty_message(), "No pending tasks.");
        assert_eq!(TaskFilter::Completed.empty_message(), "No completed tasks.");
    }

    #[test]
    fn test_milk_and_cleaning_scenario() {
        let mut store = TaskStore::new();
        let milk = store.add("Buy milk", "dairy", TaskPriority::from_code(1));
        let clean = store.add("Clean", "house", TaskPriority::from_code(3));
        assert_eq!(milk, TaskId::new(1));
        assert_eq!(clean, TaskId::new(2));

        store.complete(milk).unwrap();
        assert_eq!(ids(&store.list_pending()), vec![2]);

        store.delete(clean).unwrap();
        let all = store.list_all();
        assert_eq!(ids(&all), vec![1]);
        assert_eq!(all[0].status(), TaskStatus::Completed);

        assert_eq!(store.delete(clean), Err(Error::TaskNotFound(clean)));
    }
}
