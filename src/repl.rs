// repl.rs

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::completion::CommandCompleter;
use crate::config::ShellConfig;
use crate::dispatch::{Flow, Session};
use crate::launcher::ForkLauncher;
use crate::parser::truncate_line;

pub fn start_repl(config: &ShellConfig) -> Result<()> {
    let editor_config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter));

    let interactive = io::stdin().is_terminal();
    let mut session = Session::new(config, ForkLauncher, io::stdout());
    // one byte of the input buffer is reserved for the terminator
    let max_input = config.max_line.saturating_sub(1);

    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) if interactive => continue,
            Err(ReadlineError::Eof) => {
                info!("end of input, leaving");
                break;
            }
            Err(err) => return Err(err).context("failed to read a line"),
        };
        let line = if line.len() > max_input {
            warn!("input longer than {} bytes, truncating", max_input);
            truncate_line(&line, max_input)
        } else {
            line.as_str()
        };
        if !line.trim().is_empty() {
            if let Err(err) = rl.add_history_entry(line) {
                debug!("line not kept for editor recall: {}", err);
            }
        }

        match session.execute(line) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => error!("{}", err),
        }
        io::stdout().flush().ok();
    }
    Ok(())
}
