//! Line-oriented task session: command parsing and execution.
//!
//! The session is the in-process stand-in for a long-lived UI loop; it wires
//! a [`CliPresenter`] into the service and feeds it raw input lines.

use std::io::{self, BufRead};

use serde::Serialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::events::{Event, EventDestination, EventKind, EventSink};
use crate::output::{emit_error, emit_success, HumanOutput, OutputOptions};
use crate::presenter::Presenter;
use crate::service::TaskService;
use crate::task::Task;

const SEED_TASKS: &[(&str, i32)] = &[
    ("Study for the exam", 1),
    ("Exercise", 2),
    ("Buy groceries", 2),
    ("Call the doctor", 1),
    ("Read a book", 3),
];

const HELP_LINES: &[&str] = &[
    "add <priority> <description>     add a task at the front",
    "append <priority> <description>  add a task at the end",
    "remove <description>             remove the first exact match",
    "find <description>               locate a task (case-insensitive)",
    "priority <n>                     show tasks with the given priority",
    "search [text]                    show tasks containing text (blank shows all)",
    "list                             show all tasks",
    "stats                            show task statistics",
    "seed                             load the example dataset",
    "help                             show this list",
    "quit                             leave the session",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { description: String, priority: i32 },
    Append { description: String, priority: i32 },
    Remove { description: String },
    Find { description: String },
    FilterPriority { priority: i32 },
    Search { text: String },
    List,
    Stats,
    Seed,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "add" => {
            let (priority, description) = split_priority(rest)?;
            Command::Add {
                description,
                priority,
            }
        }
        "append" => {
            let (priority, description) = split_priority(rest)?;
            Command::Append {
                description,
                priority,
            }
        }
        "remove" => {
            if rest.is_empty() {
                return Err(Error::InvalidArgument("remove needs a description".into()));
            }
            Command::Remove {
                description: rest.to_string(),
            }
        }
        "find" => {
            if rest.is_empty() {
                return Err(Error::InvalidArgument("find needs a description".into()));
            }
            Command::Find {
                description: rest.to_string(),
            }
        }
        "priority" => Command::FilterPriority {
            priority: parse_priority(rest)?,
        },
        "search" => Command::Search {
            text: rest.to_string(),
        },
        "list" => Command::List,
        "stats" => Command::Stats,
        "seed" => Command::Seed,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(Error::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

// "add <priority> <description...>"; a missing description falls through to
// the service, which reports the validation error.
fn split_priority(rest: &str) -> Result<(i32, String)> {
    let (token, description) = match rest.split_once(char::is_whitespace) {
        Some((token, description)) => (token, description.trim()),
        None => (rest, ""),
    };
    Ok((parse_priority(token)?, description.to_string()))
}

fn parse_priority(token: &str) -> Result<i32> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::InvalidPriority(token.trim().to_string()))
}

pub fn run(cli: Cli) -> Result<()> {
    let destination = EventDestination::parse(cli.events.as_deref());
    let events_to_stdout = matches!(destination, Some(EventDestination::Stdout));
    let options = OutputOptions {
        json: cli.json && !events_to_stdout,
        quiet: cli.quiet,
    };

    let sink = match &destination {
        Some(destination) => Some(destination.open()?),
        None => None,
    };

    let presenter = CliPresenter::new(options, sink);
    let mut service = TaskService::new(presenter);
    if cli.seed {
        seed(&mut service)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "executing");
                execute(&mut service, options, command)?;
            }
            // Bad input keeps the session alive.
            Err(err) => emit_error("tl", &err, options.json)?,
        }
    }

    Ok(())
}

fn execute(
    service: &mut TaskService<CliPresenter>,
    options: OutputOptions,
    command: Command,
) -> Result<()> {
    match command {
        Command::Add {
            description,
            priority,
        } => {
            service.add_task(&description, priority, false)?;
        }
        Command::Append {
            description,
            priority,
        } => {
            service.add_task(&description, priority, true)?;
        }
        Command::Remove { description } => {
            service.remove_task(&description)?;
        }
        Command::Find { description } => service.find_task(&description)?,
        Command::FilterPriority { priority } => service.filter_by_priority(priority)?,
        Command::Search { text } => service.filter_by_text(&text)?,
        Command::List => service.show_all()?,
        Command::Stats => run_stats(service, options)?,
        Command::Seed => seed(service)?,
        Command::Help => run_help(options)?,
        Command::Quit => {}
    }
    Ok(())
}

fn run_stats(service: &TaskService<CliPresenter>, options: OutputOptions) -> Result<()> {
    let stats = service.statistics();

    let mut human = HumanOutput::new("Task stats");
    human.push_summary("Total", stats.total.to_string());
    human.push_summary("High", count_for(&stats.by_priority, 1));
    human.push_summary("Medium", count_for(&stats.by_priority, 2));
    human.push_summary("Low", count_for(&stats.by_priority, 3));
    for (priority, count) in &stats.by_priority {
        if !(1..=3).contains(priority) {
            human.push_detail(format!("priority {priority}: {count}"));
        }
    }

    emit_success(options, "stats", &stats, Some(&human))
}

fn count_for(by_priority: &std::collections::BTreeMap<i32, usize>, priority: i32) -> String {
    by_priority.get(&priority).copied().unwrap_or(0).to_string()
}

fn run_help(options: OutputOptions) -> Result<()> {
    #[derive(Serialize)]
    struct HelpData {
        commands: Vec<&'static str>,
    }

    let mut human = HumanOutput::new("Commands");
    for line in HELP_LINES {
        human.push_detail(*line);
    }

    emit_success(
        options,
        "help",
        &HelpData {
            commands: HELP_LINES.to_vec(),
        },
        Some(&human),
    )
}

fn seed(service: &mut TaskService<CliPresenter>) -> Result<()> {
    for (description, priority) in SEED_TASKS {
        service.add_task(description, *priority, false)?;
    }
    debug!(count = SEED_TASKS.len(), "loaded example tasks");
    Ok(())
}

#[derive(Serialize)]
struct TaskData<'a> {
    task: &'a Task,
}

#[derive(Serialize)]
struct FoundData<'a> {
    task: &'a Task,
    position: usize,
}

#[derive(Serialize)]
struct NotFoundData<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct MessageData<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ViewData<'a> {
    total: usize,
    tasks: &'a [Task],
}

/// Presentation contract implementation for the terminal: human status lines
/// or JSON envelopes, plus optional JSONL events.
pub struct CliPresenter {
    options: OutputOptions,
    sink: Option<EventSink>,
}

impl CliPresenter {
    pub fn new(options: OutputOptions, sink: Option<EventSink>) -> Self {
        Self { options, sink }
    }

    fn emit_event<T: Serialize>(&mut self, kind: EventKind, data: &T) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            let event = Event::new(kind).with_data(data)?;
            sink.emit(&event)?;
        }
        Ok(())
    }
}

impl Presenter for CliPresenter {
    fn task_added(&mut self, task: &Task) -> Result<()> {
        self.emit_event(EventKind::TaskAdded, &TaskData { task })?;
        let human = HumanOutput::new(format!("Task added: {}", task.description));
        emit_success(self.options, "task-added", &TaskData { task }, Some(&human))
    }

    fn task_removed(&mut self, task: &Task) -> Result<()> {
        self.emit_event(EventKind::TaskRemoved, &TaskData { task })?;
        let human = HumanOutput::new(format!("Task removed: {}", task.description));
        emit_success(
            self.options,
            "task-removed",
            &TaskData { task },
            Some(&human),
        )
    }

    fn task_found(&mut self, task: &Task, position: usize) -> Result<()> {
        self.emit_event(EventKind::TaskFound, &FoundData { task, position })?;
        let human = HumanOutput::new(format!(
            "Task found at position {position}: {}",
            task.description
        ));
        emit_success(
            self.options,
            "task-found",
            &FoundData { task, position },
            Some(&human),
        )
    }

    fn task_not_found(&mut self, description: &str) -> Result<()> {
        self.emit_event(EventKind::TaskNotFound, &NotFoundData { description })?;
        let human = HumanOutput::new(format!("Task '{description}' not found"));
        emit_success(
            self.options,
            "task-not-found",
            &NotFoundData { description },
            Some(&human),
        )
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.emit_event(EventKind::ValidationFailed, &MessageData { message })?;
        let err = Error::InvalidArgument(message.to_string());
        emit_error("task", &err, self.options.json)
    }

    fn show_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        self.emit_event(EventKind::ViewRefreshed, &ViewData {
            total: tasks.len(),
            tasks,
        })?;

        let mut human = HumanOutput::new("Tasks");
        human.push_summary("Total", tasks.len().to_string());
        for task in tasks {
            human.push_detail(format!("[{}] {}", task.priority_label(), task.description));
        }

        emit_success(
            self.options,
            "view",
            &ViewData {
                total: tasks.len(),
                tasks,
            },
            Some(&human),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_priority_and_description() {
        let command = parse_command("add 2 Buy milk").expect("parse");
        assert_eq!(
            command,
            Some(Command::Add {
                description: "Buy milk".to_string(),
                priority: 2,
            })
        );
    }

    #[test]
    fn parses_append_and_spaced_descriptions() {
        let command = parse_command("append 1 Call the doctor").expect("parse");
        assert_eq!(
            command,
            Some(Command::Append {
                description: "Call the doctor".to_string(),
                priority: 1,
            })
        );
    }

    #[test]
    fn add_without_description_parses_and_defers_to_validation() {
        let command = parse_command("add 2").expect("parse");
        assert_eq!(
            command,
            Some(Command::Add {
                description: String::new(),
                priority: 2,
            })
        );
    }

    #[test]
    fn rejects_non_integer_priority() {
        let err = parse_command("add high Buy milk").expect_err("parse");
        assert!(matches!(err, Error::InvalidPriority(token) if token == "high"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   ").expect("parse"), None);
        assert_eq!(parse_command("").expect("parse"), None);
    }

    #[test]
    fn search_allows_blank_text() {
        let command = parse_command("search").expect("parse");
        assert_eq!(
            command,
            Some(Command::Search {
                text: String::new()
            })
        );
    }

    #[test]
    fn remove_requires_a_description() {
        let err = parse_command("remove").expect_err("parse");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        let err = parse_command("frobnicate now").expect_err("parse");
        assert!(matches!(err, Error::UnknownCommand(verb) if verb == "frobnicate"));
    }

    #[test]
    fn quit_and_exit_both_end_the_session() {
        assert_eq!(parse_command("quit").expect("parse"), Some(Command::Quit));
        assert_eq!(parse_command("exit").expect("parse"), Some(Command::Quit));
    }
}
