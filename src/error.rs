// error.rs

use thiserror::Error;

/// Everything the dispatcher can report. The `Display` text is exactly what
/// the user sees on the shell's output.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{path}: No such file or directory.")]
    ChangeDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cd: missing argument.")]
    MissingDirectory,
    #[error("Command not in history.")]
    NotInHistory,
    #[error("{0}: history recall nested too deeply.")]
    RecallTooDeep(String),
    #[error("{0}: Command not found.")]
    CommandNotFound(String),
    #[error("fork: {0}")]
    Fork(#[source] nix::Error),
    #[error("waitpid: {0}")]
    Wait(#[source] nix::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
