//! Interactive menu loop
//!
//! Reads one answer per line from `input`, drives a [`TaskRepository`] and
//! writes everything the user sees to `output`.

use std::io::{self, BufRead, Write};

use tracker_core::task::{TaskFilter, TaskId, TaskPriority, TaskRepository};
use tracker_core::Error;

use crate::config::ShellConfig;

const BANNER: &str = "==============================\n   TASK MANAGEMENT SYSTEM\n==============================";

const MENU: [&str; 7] = [
    "1. Add Task",
    "2. Mark Task as Completed",
    "3. Delete Task",
    "4. Show All Tasks",
    "5. Show Pending Tasks",
    "6. Show Completed Tasks",
    "0. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, S, R, W> {
    store: &'a mut S,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: TaskRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut S, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            store,
            input,
            output,
            config,
        }
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(mut self) -> io::Result<()> {
        tracing::info!(strict_priority = self.config.strict_priority, "shell started");

        if self.config.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }

        loop {
            writeln!(self.output)?;
            for entry in MENU {
                writeln!(self.output, "{}", entry)?;
            }

            let Some(choice) = self.prompt("Enter choice: ")? else {
                tracing::info!("input closed, leaving shell");
                break;
            };

            if self.dispatch(&choice)? == Flow::Exit {
                break;
            }
        }

        self.output.flush()
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        match choice.parse::<i64>() {
            Ok(1) => self.add_task(),
            Ok(2) => self.complete_task(),
            Ok(3) => self.delete_task(),
            Ok(4) => self.show(TaskFilter::All),
            Ok(5) => self.show(TaskFilter::Pending),
            Ok(6) => self.show(TaskFilter::Completed),
            Ok(0) => {
                writeln!(self.output, "Exiting Task Manager...")?;
                Ok(Flow::Exit)
            }
            _ => {
                tracing::debug!(choice, "invalid menu choice");
                writeln!(self.output, "Invalid choice!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_task(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter Task Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Enter Description: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_priority) = self.prompt("Enter Priority (1-High, 2-Medium, 3-Low): ")? else {
            return Ok(Flow::Exit);
        };

        let Some(priority) = self.parse_priority(&raw_priority) else {
            writeln!(self.output, "Invalid priority.")?;
            return Ok(Flow::Continue);
        };

        let id = self.store.add(title, description, priority);
        writeln!(self.output, "Task Added Successfully with ID {}", id)?;
        Ok(Flow::Continue)
    }

    fn complete_task(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_id("Enter Task ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };

        match self.store.complete(id) {
            Ok(()) => writeln!(self.output, "Task marked as completed.")?,
            Err(Error::TaskNotFound(_)) => writeln!(self.output, "Task not found.")?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_task(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_id("Enter Task ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };

        match self.store.delete(id) {
            Ok(_) => writeln!(self.output, "Task deleted successfully.")?,
            Err(Error::TaskNotFound(_)) => writeln!(self.output, "Task not found.")?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, filter: TaskFilter) -> io::Result<Flow> {
        let tasks = self.store.list(filter);
        if tasks.is_empty() {
            writeln!(self.output, "{}", filter.empty_message())?;
        } else {
            for task in tasks {
                write!(self.output, "{}", task)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn parse_priority(&self, raw: &str) -> Option<TaskPriority> {
        let code = raw.parse::<i64>().ok()?;
        if self.config.strict_priority {
            TaskPriority::try_from(code)
                .map_err(|err| tracing::debug!(%err, "rejected priority"))
                .ok()
        } else {
            Some(TaskPriority::from_code(code))
        }
    }

    /// Outer `None` means input closed; inner `None` means the answer was not an ID.
    fn prompt_id(&mut self, message: &str) -> io::Result<Option<Option<TaskId>>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };

        match raw.parse::<u64>() {
            Ok(n) => Ok(Some(Some(TaskId::new(n)))),
            Err(_) => {
                writeln!(self.output, "Invalid task ID.")?;
                Ok(Some(None))
            }
        }
    }

    /// Print `message`, then read one trimmed line. `None` on end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
