// dispatch.rs

use std::io::{self, Write};

use log::{debug, warn};

use crate::builtins::{self, parse_recall_index, Builtin};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::history::HistoryStore;
use crate::launcher::Launcher;
use crate::parser::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Per-session state: both histories, the launcher and where built-in
/// output goes.
pub struct Session<L, W> {
    history: HistoryStore,
    launcher: L,
    out: W,
    max_args: usize,
    max_line: usize,
}

impl<L: Launcher, W: Write> Session<L, W> {
    pub fn new(config: &ShellConfig, launcher: L, out: W) -> Self {
        Self {
            history: HistoryStore::new(config.history_capacity),
            launcher,
            out,
            max_args: config.max_args,
            max_line: config.max_line,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Records and runs one input line. `!n` lines loop back here with the
    /// recalled text, so each hop is recorded as its own entry. The index of
    /// `!n` is looked up before the `!n` line itself is recorded.
    pub fn execute(&mut self, line: &str) -> Result<Flow, ShellError> {
        let mut line = line.trim().to_string();
        let mut hops = 0;
        loop {
            let argv = tokenize(&line, self.max_args, self.max_line);
            if argv.is_empty() {
                return Ok(Flow::Continue);
            }
            let builtin = Builtin::parse(&argv);
            let lookup = match builtin {
                Some(Builtin::Recall(digits)) => Some(self.recall(digits)),
                _ => None,
            };
            self.history.record_command(line.as_str());
            debug!("dispatching {:?}", argv);

            let recalled = match builtin {
                Some(Builtin::Quit) => return Ok(Flow::Exit),
                Some(Builtin::ChangeDir(target)) => {
                    if let Err(e) = builtins::change_dir(target) {
                        self.report(&e)?;
                    }
                    None
                }
                Some(Builtin::ListPids) => {
                    self.history.list_pids(&mut self.out)?;
                    None
                }
                Some(Builtin::History) => {
                    self.history.list_commands(&mut self.out)?;
                    None
                }
                Some(Builtin::Recall(_)) => match lookup {
                    Some(Ok(next)) => Some(next),
                    Some(Err(e)) => {
                        self.report(&e)?;
                        None
                    }
                    None => None,
                },
                None => {
                    self.launch(&argv)?;
                    None
                }
            };

            let Some(next) = recalled else {
                return Ok(Flow::Continue);
            };
            hops += 1;
            if hops > self.history.commands().capacity() {
                self.report(&ShellError::RecallTooDeep(argv[0].clone()))?;
                return Ok(Flow::Continue);
            }
            debug!("{} recalls {:?}", argv[0], next);
            line = next;
        }
    }

    fn recall(&self, digits: &str) -> Result<String, ShellError> {
        parse_recall_index(digits)
            .and_then(|index| self.history.command(index))
            .map(str::to_string)
            .ok_or(ShellError::NotInHistory)
    }

    fn launch(&mut self, argv: &[String]) -> Result<(), ShellError> {
        self.out.flush()?;
        let pid = match self.launcher.spawn(argv) {
            Ok(pid) => pid,
            Err(e) => return self.report(&e),
        };
        self.history.record_pid(pid);
        if let Err(e) = self.launcher.wait(pid) {
            self.report(&e)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &ShellError) -> Result<(), ShellError> {
        debug!("reporting: {}", err);
        match writeln!(self.out, "{}", err).and_then(|_| self.out.flush()) {
            Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => {
                warn!("output closed, dropped message: {}", err);
                Ok(())
            }
            other => Ok(other?),
        }
    }
}
