//! The interactive command loop.
//!
//! # Design
//! The dispatcher owns nothing global: the input stream, both output streams,
//! and the transport are handed in by the caller. Each loop iteration reads a
//! command code, turns it into a `RequestIntent`, and runs it through the
//! `Session`. Failures come back as `DispatchError` and go through
//! [`Dispatcher::report`], the one place that decides whether the run goes on.
//! Fatal errors end the loop with an [`Exit`]; only `main` terminates the
//! process.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use messages_core::{
    parse_row_id, Command, InputError, MessagesClient, NewMessage, RequestIntent, RowId,
};
use tracing::{debug, error, warn};

use crate::error::{DispatchError, Exit};
use crate::output::{render_menu, render_response, FAREWELL, URI_PROMPT};
use crate::session::Session;
use crate::transport::Transport;

/// Consecutive failed reads at the command prompt before the loop gives up.
const READ_FAILURE_LIMIT: usize = 10;

/// Run one interactive session: prompt for the base URI, then serve commands
/// until `Q`, end of input, or a fatal error.
pub fn run<R, W, E, T>(input: &mut R, stdout: &mut W, stderr: &mut E, transport: &T) -> Exit
where
    R: BufRead,
    W: Write,
    E: Write,
    T: Transport,
{
    let mut dispatcher = Dispatcher {
        input,
        stdout,
        stderr,
    };
    match dispatcher.start(transport) {
        Ok(session) => dispatcher.serve(&session),
        Err(exit) => exit,
    }
}

struct Dispatcher<'a, R, W, E> {
    input: &'a mut R,
    stdout: &'a mut W,
    stderr: &'a mut E,
}

impl<R, W, E> Dispatcher<'_, R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    fn start<'t, T: Transport>(&mut self, transport: &'t T) -> Result<Session<'t, T>, Exit> {
        let prompted = writeln!(self.stdout, "{URI_PROMPT}").and_then(|()| self.stdout.flush());
        if let Err(err) = prompted {
            let _ = self.report(&DispatchError::Write(err));
        }
        let raw = match self.read_line() {
            Ok(line) => line.unwrap_or_default(),
            Err(err) => {
                let _ = self.report(&DispatchError::Read(err));
                String::new()
            }
        };

        match MessagesClient::new(&raw) {
            Ok(client) => {
                debug!(base_uri = %client.base_uri(), "session started");
                Ok(Session::new(client, transport))
            }
            Err(err) => match self.report(&DispatchError::from(err)) {
                ControlFlow::Break(exit) => Err(exit),
                ControlFlow::Continue(()) => Err(Exit::UriError),
            },
        }
    }

    fn serve<T: Transport>(&mut self, session: &Session<'_, T>) -> Exit {
        let mut read_failures = 0;
        loop {
            if let Err(err) = self.print_menu() {
                let _ = self.report(&DispatchError::Write(err));
            }

            let line = match self.read_line() {
                Ok(Some(line)) => {
                    read_failures = 0;
                    line
                }
                Ok(None) => {
                    debug!("input closed");
                    break;
                }
                Err(err) => {
                    read_failures += 1;
                    let _ = self.report(&DispatchError::Read(err));
                    if read_failures >= READ_FAILURE_LIMIT {
                        warn!(read_failures, "giving up on unreadable input");
                        break;
                    }
                    continue;
                }
            };

            let Some(command) = Command::from_code(&line) else {
                debug!(code = %line, "ignoring unrecognised command");
                continue;
            };
            if command == Command::Quit {
                break;
            }
            if let Err(err) = self.dispatch(session, command) {
                if let ControlFlow::Break(exit) = self.report(&err) {
                    return exit;
                }
            }
        }

        let farewell = writeln!(self.stdout, "{FAREWELL}").and_then(|()| self.stdout.flush());
        if let Err(err) = farewell {
            let _ = self.report(&DispatchError::Write(err));
        }
        debug!(base_uri = %session.base_uri(), "session ended");
        Exit::Quit
    }

    fn dispatch<T: Transport>(
        &mut self,
        session: &Session<'_, T>,
        command: Command,
    ) -> Result<(), DispatchError> {
        let intent = match command {
            Command::GetOne => {
                RequestIntent::GetOne(self.prompt_row_id("GET which row id?: ")?)
            }
            Command::GetAll => RequestIntent::GetAll,
            Command::PostOne => {
                let title = self.prompt_text("Title? ", "title")?;
                let message = self.prompt_text("Message? ", "message")?;
                RequestIntent::PostOne(NewMessage::new(title, message))
            }
            Command::DeleteOne => {
                RequestIntent::DeleteOne(self.prompt_row_id("DELETE which row id?: ")?)
            }
            Command::Quit => return Ok(()),
        };

        // Echoed before the derived URI is validated.
        writeln!(
            self.stdout,
            "Trying following request: {} {}",
            session.target_uri(&intent),
            intent.method()
        )
        .map_err(DispatchError::Write)?;
        let request = session.build(&intent)?;

        let response = session.send(&request)?;
        self.stdout
            .write_all(render_response(&response).as_bytes())
            .and_then(|()| self.stdout.flush())
            .map_err(DispatchError::Write)
    }

    /// Print the category's message and decide whether the run continues.
    fn report(&mut self, err: &DispatchError) -> ControlFlow<Exit> {
        let category = err.category();
        let _ = writeln!(self.stderr, "{}", category.message());
        let _ = self.stderr.flush();

        match category.fatal_exit() {
            Some(exit) => {
                error!(?category, code = exit.code(), "{err}");
                ControlFlow::Break(exit)
            }
            None => {
                warn!(?category, "{err}");
                ControlFlow::Continue(())
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.stdout.write_all(render_menu().as_bytes())?;
        self.stdout.flush()
    }

    fn prompt(&mut self, text: &str) -> Result<(), DispatchError> {
        write!(self.stdout, "{text}")
            .and_then(|()| self.stdout.flush())
            .map_err(DispatchError::Write)
    }

    fn prompt_row_id(&mut self, text: &str) -> Result<RowId, DispatchError> {
        self.prompt(text)?;
        let line = self
            .read_line()
            .map_err(DispatchError::Read)?
            .ok_or(InputError::Missing("row id"))?;
        Ok(parse_row_id(&line)?)
    }

    fn prompt_text(&mut self, text: &str, what: &'static str) -> Result<String, DispatchError> {
        self.prompt(text)?;
        let line = self
            .read_line()
            .map_err(DispatchError::Read)?
            .ok_or(InputError::Missing(what))?;
        Ok(line)
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
