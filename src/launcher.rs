// launcher.rs

use std::ffi::CString;

use itertools::Itertools;
use log::{debug, warn};
use nix::errno::Errno;
use nix::sys::wait::waitpid;
use nix::unistd::{self, execvp, fork, ForkResult, Pid};

use crate::error::ShellError;

/// Starts external programs for the dispatcher and waits for them.
pub trait Launcher {
    /// Forks a child running `argv[0]` with `argv` as its arguments.
    /// Succeeds as soon as the child exists, even if its exec later fails.
    fn spawn(&mut self, argv: &[String]) -> Result<Pid, ShellError>;

    /// Blocks until `pid` terminates. Its exit status is not reported.
    fn wait(&mut self, pid: Pid) -> Result<(), ShellError>;
}

#[derive(Debug, Default)]
pub struct ForkLauncher;

impl Launcher for ForkLauncher {
    fn spawn(&mut self, argv: &[String]) -> Result<Pid, ShellError> {
        let Some(program) = argv.first() else {
            return Err(ShellError::CommandNotFound(String::new()));
        };
        let args: Vec<CString> = argv
            .iter()
            .map(|arg| CString::new(arg.as_str()))
            .collect::<Result<_, _>>()
            .map_err(|_| ShellError::CommandNotFound(program.clone()))?;
        // Built before forking so the child only has to exec or write and exit.
        let not_found = format!("{}\n", ShellError::CommandNotFound(program.clone()));

        debug!("launching {}", argv.iter().join(" "));
        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                let _ = execvp(&args[0], &args);
                let _ = unistd::write(libc::STDOUT_FILENO, not_found.as_bytes());
                unsafe { libc::_exit(127) }
            }
            Ok(ForkResult::Parent { child }) => {
                debug!("spawned {} as pid {}", program, child);
                Ok(child)
            }
            Err(e) => {
                warn!("fork failed for {}: {}", program, e);
                Err(ShellError::Fork(e))
            }
        }
    }

    fn wait(&mut self, pid: Pid) -> Result<(), ShellError> {
        loop {
            match waitpid(pid, None) {
                Ok(status) => {
                    debug!("pid {} finished: {:?}", pid, status);
                    return Ok(());
                }
                Err(Errno::EINTR) => continue,
                Err(e) => {
                    warn!("waitpid({}) failed: {}", pid, e);
                    return Err(ShellError::Wait(e));
                }
            }
        }
    }
}
