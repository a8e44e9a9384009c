// builtins.rs

use std::env;

use crate::error::ShellError;

pub const BUILTIN_NAMES: [&str; 5] = ["quit", "exit", "cd", "listpids", "history"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin<'a> {
    Quit,
    ChangeDir(Option<&'a str>),
    ListPids,
    History,
    /// `!n`; carries whatever followed the bang.
    Recall(&'a str),
}

impl<'a> Builtin<'a> {
    pub fn parse(tokens: &'a [String]) -> Option<Self> {
        let command = tokens.first()?.as_str();
        let builtin = match command {
            "quit" | "exit" => Builtin::Quit,
            "cd" => Builtin::ChangeDir(tokens.get(1).map(String::as_str)),
            "listpids" => Builtin::ListPids,
            "history" => Builtin::History,
            _ => Builtin::Recall(command.strip_prefix('!')?),
        };
        Some(builtin)
    }
}

pub fn change_dir(target: Option<&str>) -> Result<(), ShellError> {
    let target = target.ok_or(ShellError::MissingDirectory)?;
    env::set_current_dir(target).map_err(|source| ShellError::ChangeDir {
        path: target.to_string(),
        source,
    })
}

/// Parses the digits after `!`. Signs, blanks and anything but ASCII digits are rejected.
pub fn parse_recall_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
