// completion.rs

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::builtins::BUILTIN_NAMES;

/// Completes the command word from the builtins and whatever is executable on `PATH`.
#[derive(Debug, Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_NAMES
            .iter()
            .filter(|b| b.starts_with(prefix))
            .map(|b| b.to_string())
            .collect();
        if let Ok(path_var) = std::env::var("PATH") {
            for dir in path_var.split(':').filter(|d| !d.is_empty()) {
                names.extend(executables_in(Path::new(dir), prefix));
            }
        }
        names.sort();
        names.dedup();
        names
    }
}

fn executables_in(dir: &Path, prefix: &str) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !name.starts_with(prefix) {
                return None;
            }
            // follows symlinks, unlike entry.metadata()
            let meta = std::fs::metadata(entry.path()).ok()?;
            (meta.is_file() && meta.permissions().mode() & 0o111 != 0).then_some(name)
        })
        .collect()
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before.len() - before.trim_start().len();
        let word = &before[start..];
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let pairs = self
            .candidates(word)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
