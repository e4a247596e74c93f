//! The transcript log and input recall.
//!
//! The log is append-only and is the sole source for the rendered
//! transcript. `clear` replaces it wholesale; entries are never mutated or
//! removed individually. Reveal counters on animated entries are
//! presentation bookkeeping, not content.

use super::resolver::Response;

/// One executed command and its resolved response.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub input: String,
    pub response: Response,
    /// Lines currently visible. Equals `response.lines.len()` for
    /// non-animated entries from the start.
    pub revealed: usize,
    age_ticks: u64,
}

impl HistoryEntry {
    pub fn fully_revealed(&self) -> bool {
        self.revealed >= self.response.lines.len()
    }
}

/// Append-only ordered sequence of history entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: String, response: Response) {
        let revealed = if response.animated {
            // The first line shows immediately; the rest reveal on ticks.
            1.min(response.lines.len())
        } else {
            response.lines.len()
        };
        self.entries.push(HistoryEntry {
            input,
            response,
            revealed,
            age_ticks: 0,
        });
    }

    /// Replace the log with the empty sequence.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance staged reveals by one tick. An animated entry holds at its
    /// first line for `delay_ticks`, then reveals one further line per tick.
    /// Returns true if anything became visible.
    pub fn advance_reveal(&mut self, delay_ticks: u64) -> bool {
        let mut changed = false;
        for entry in &mut self.entries {
            if entry.fully_revealed() {
                continue;
            }
            entry.age_ticks += 1;
            if entry.age_ticks >= delay_ticks {
                entry.revealed += 1;
                changed = true;
            }
        }
        changed
    }
}

/// Recall of previously typed commands with Up/Down, most recent first.
/// Recall only rewrites the input line; it never touches the log.
#[derive(Debug, Clone, Default)]
pub struct InputRecall {
    commands: Vec<String>,
    /// Steps back from the most recent command; `None` when not recalling.
    cursor: Option<usize>,
}

impl InputRecall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, command: String) {
        self.commands.push(command);
        self.cursor = None;
    }

    /// Step to an older command, holding at the oldest.
    pub fn prev(&mut self) -> Option<&str> {
        if self.commands.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(c) => (c + 1).min(self.commands.len() - 1),
        };
        self.cursor = Some(next);
        Some(&self.commands[self.commands.len() - 1 - next])
    }

    /// Step to a newer command. Returns `None` when stepping past the most
    /// recent one; the caller clears the input line.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                Some(&self.commands[self.commands.len() - c])
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}
