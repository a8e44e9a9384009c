// history.rs

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};

use log::trace;
use nix::unistd::Pid;

/// A bounded log that drops its oldest entry once full.
/// Index 0 is always the oldest surviving entry.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `entry`, returning whatever had to be evicted to make room.
    pub fn push(&mut self, entry: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(entry);
        }
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: Display> History<T> {
    /// Writes one `<index>: <entry>` line per entry, oldest first.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(out, "{}: {}", i, entry)?;
        }
        Ok(())
    }
}

/// The two per-session logs: issued command lines and spawned pids.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    commands: History<String>,
    pids: History<Pid>,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            commands: History::with_capacity(capacity),
            pids: History::with_capacity(capacity),
        }
    }

    pub fn record_command(&mut self, line: impl Into<String>) {
        if let Some(old) = self.commands.push(line.into()) {
            trace!("command history full, dropped {:?}", old);
        }
    }

    pub fn record_pid(&mut self, pid: Pid) {
        if let Some(old) = self.pids.push(pid) {
            trace!("pid history full, dropped {}", old);
        }
    }

    pub fn list_commands<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.commands.write_to(out)
    }

    pub fn list_pids<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.pids.write_to(out)
    }

    pub fn command(&self, index: usize) -> Option<&str> {
        self.commands.get(index).map(String::as_str)
    }

    pub fn commands(&self) -> &History<String> {
        &self.commands
    }

    pub fn pids(&self) -> &History<Pid> {
        &self.pids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_below_capacity_keeps_everything() {
        let mut h = History::with_capacity(3);
        assert_eq!(h.push(1), None);
        assert_eq!(h.push(2), None);
        assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(h.len(), 2);
        assert!(!h.is_empty());
    }

    #[test]
    fn full_history_evicts_oldest_and_keeps_order() {
        let mut h = History::with_capacity(15);
        for i in 0..40 {
            let evicted = h.push(i);
            if i < 15 {
                assert_eq!(evicted, None);
            } else {
                assert_eq!(evicted, Some(i - 15));
            }
            assert!(h.len() <= 15);
        }
        assert_eq!(h.iter().copied().collect::<Vec<_>>(), (25..40).collect::<Vec<_>>());
        assert_eq!(h.get(0), Some(&25));
        assert_eq!(h.get(14), Some(&39));
        assert_eq!(h.get(15), None);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut h = History::with_capacity(0);
        assert_eq!(h.push("x"), Some("x"));
        assert!(h.is_empty());
    }

    #[test]
    fn list_commands_prints_indexed_lines() {
        let mut store = HistoryStore::new(15);
        store.record_command("ls");
        store.record_command("pwd");
        store.record_command("echo hi");

        let mut out = Vec::new();
        store.list_commands(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0: ls\n1: pwd\n2: echo hi\n");
    }

    #[test]
    fn list_pids_prints_raw_pid_values() {
        let mut store = HistoryStore::new(15);
        store.record_pid(Pid::from_raw(4242));
        store.record_pid(Pid::from_raw(4243));

        let mut out = Vec::new();
        store.list_pids(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0: 4242\n1: 4243\n");
    }

    #[test]
    fn the_two_logs_are_independent() {
        let mut store = HistoryStore::new(2);
        store.record_command("a");
        store.record_command("b");
        store.record_command("c");
        store.record_pid(Pid::from_raw(7));

        assert_eq!(store.commands().len(), 2);
        assert_eq!(store.command(0), Some("b"));
        assert_eq!(store.pids().len(), 1);
    }

    #[test]
    fn listing_does_not_mutate() {
        let mut store = HistoryStore::new(3);
        store.record_command("a");
        store.record_pid(Pid::from_raw(1));
        let mut sink = Vec::new();
        store.list_commands(&mut sink).unwrap();
        store.list_pids(&mut sink).unwrap();
        assert_eq!(store.commands().len(), 1);
        assert_eq!(store.pids().len(), 1);
    }
}
