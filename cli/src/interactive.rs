//! Line-oriented dashboard session.
//!
//! Mirrors the browser page: the list is fetched on start, `add` opens the
//! form, `name`/`status` edit the draft, `submit`/`cancel` close it, and
//! `set` is the per-row status selector. The dashboard is re-rendered after
//! every command. Request failures are only logged, as in the browser.

#[cfg(test)]
#[path = "interactive_test.rs"]
mod interactive_test;

use std::io::{self, BufRead, Write};

use fleet::{Dashboard, ParseStatusError, SubmitOutcome, UtcOffset, VehicleApi, VehicleStatus};

use crate::render::render_dashboard;

const HELP: &str = "\
commands:
  refresh               re-fetch the vehicle list
  add                   open the add-vehicle form
  name <text>           set the draft name
  status <status>       set the draft status (active, maintenance, inactive)
  submit                send the draft
  cancel                close the form and discard the draft
  set <id> <status>     change a vehicle's status
  help                  show this help
  quit                  leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Add,
    Name(String),
    Status(VehicleStatus),
    Submit,
    Cancel,
    Set { id: String, status: VehicleStatus },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Status(#[from] ParseStatusError),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Everything after `name` and its separating whitespace is taken verbatim so
/// names may contain spaces.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseCommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None);
    }
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(word, rest)| (word, rest.trim_start()));

    let command = match word {
        "refresh" | "r" => Command::Refresh,
        "add" => Command::Add,
        "name" => Command::Name(rest.to_owned()),
        "status" => {
            let raw = rest.trim();
            if raw.is_empty() {
                return Err(ParseCommandError::MissingArgument("status"));
            }
            Command::Status(raw.parse()?)
        }
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "set" => {
            let mut args = rest.split_whitespace();
            let (Some(id), Some(status)) = (args.next(), args.next()) else {
                return Err(ParseCommandError::MissingArgument("set"));
            };
            Command::Set { id: id.to_owned(), status: status.parse()? }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseCommandError::Unknown(other.trim_end().to_owned())),
    };
    Ok(Some(command))
}

/// Run the session until `quit` or end of input. Timestamps render at `offset`.
pub async fn run_session<A, R, W>(
    dashboard: &mut Dashboard<A>,
    input: R,
    out: &mut W,
    offset: UtcOffset,
) -> io::Result<()>
where
    A: VehicleApi,
    R: BufRead,
    W: Write,
{
    dashboard.mount().await;
    write!(out, "{}", render_dashboard(dashboard.state(), offset))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt(out)?;
                continue;
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                prompt(out)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                out.write_all(HELP.as_bytes())?;
                prompt(out)?;
                continue;
            }
            command => apply(dashboard, command, out).await?,
        }

        write!(out, "{}", render_dashboard(dashboard.state(), offset))?;
        prompt(out)?;
    }
    out.flush()
}

async fn apply<A: VehicleApi, W: Write>(
    dashboard: &mut Dashboard<A>,
    command: Command,
    out: &mut W,
) -> io::Result<()> {
    let form_open = dashboard.state().is_modal_open();
    match command {
        Command::Refresh => {
            dashboard.refresh().await;
        }
        Command::Add => dashboard.open_modal(),
        Command::Name(_) | Command::Status(_) | Command::Submit | Command::Cancel if !form_open => {
            writeln!(out, "no form open; use `add` first")?;
        }
        Command::Name(name) => dashboard.set_draft_name(name),
        Command::Status(status) => dashboard.set_draft_status(status),
        Command::Submit => {
            if let SubmitOutcome::Invalid(err) = dashboard.submit().await {
                writeln!(out, "{err}")?;
            }
        }
        Command::Cancel => dashboard.cancel_modal(),
        Command::Set { id, status } => {
            if dashboard.state().find(&id).is_some() {
                dashboard.change_status(&id, status).await;
            } else {
                writeln!(out, "no vehicle with id `{id}`")?;
            }
        }
        Command::Help | Command::Quit => {}
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
