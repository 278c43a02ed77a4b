//! Interactive session loop and rendering.
//!
//! # Responsibility
//! - Read lines, dispatch commands against one task store, render results.
//!
//! # Invariants
//! - The loop holds exclusive ownership of its store for the whole session.
//! - Unknown ids render as `task <id> not found`; every other store failure
//!   renders as `error: <message>` and the session continues.
//! - End of input ends the session as cleanly as `exit`.

use crate::command::{self, Command};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use ticklist_core::{StoreError, Task, TaskStore};

const HELP_TEXT: &str = "Commands:
  add <title>           - add new task
  list                  - list tasks
  update <id> <title>   - update task title
  delete <id>           - delete task
  done <id>             - toggle task done/undone
  help                  - show this help
  exit                  - quit";

/// Runs one interactive session over the given store and streams.
///
/// Returns an error only when the output stream itself fails; store
/// failures are rendered and the loop keeps going.
pub fn run<S, R, W>(store: &mut S, mut input: R, mut output: W) -> io::Result<()>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    info!("event=repl_start module=cli status=ok");
    writeln!(output, "ticklist - type 'help' for commands")?;

    let mut dispatched: u64 = 0;
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match command::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Help)) => writeln!(output, "{HELP_TEXT}")?,
            Ok(Some(Command::Exit)) => {
                writeln!(output, "bye")?;
                break;
            }
            Ok(Some(Command::Add { title })) => {
                dispatched += 1;
                match store.create_task(&title) {
                    Ok(task) => writeln!(output, "added: {} - {}", task.id, task.title)?,
                    Err(err) => render_store_error(&mut output, err)?,
                }
            }
            Ok(Some(Command::List)) => {
                dispatched += 1;
                match store.list_tasks() {
                    Ok(tasks) => render_tasks(&mut output, &tasks)?,
                    Err(err) => render_store_error(&mut output, err)?,
                }
            }
            Ok(Some(Command::Update { id, title })) => {
                dispatched += 1;
                match store.rename_task(id, &title) {
                    Ok(()) => writeln!(output, "updated")?,
                    Err(err) => render_store_error(&mut output, err)?,
                }
            }
            Ok(Some(Command::Delete { id })) => {
                dispatched += 1;
                match store.delete_task(id) {
                    Ok(()) => writeln!(output, "deleted")?,
                    Err(err) => render_store_error(&mut output, err)?,
                }
            }
            Ok(Some(Command::Done { id })) => {
                dispatched += 1;
                match store.toggle_done(id) {
                    Ok(()) => writeln!(output, "toggled")?,
                    Err(err) => render_store_error(&mut output, err)?,
                }
            }
            Err(message) => writeln!(output, "{message}")?,
        }
    }

    info!("event=repl_exit module=cli status=ok dispatched={dispatched}");
    Ok(())
}

fn render_tasks(output: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(output, "no tasks");
    }
    for task in tasks {
        let status = if task.done { "[x]" } else { "[ ]" };
        writeln!(output, "{}. {} {}", task.id, status, task.title)?;
    }
    Ok(())
}

fn render_store_error(output: &mut impl Write, err: StoreError) -> io::Result<()> {
    match err {
        StoreError::NotFound(id) => writeln!(output, "task {id} not found"),
        other => {
            warn!("event=store_call module=cli status=error error={other}");
            writeln!(output, "error: {other}")
        }
    }
}
