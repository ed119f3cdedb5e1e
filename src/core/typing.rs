use super::constants::{DELETE_DELAY_MS, HOLD_EMPTY_MS, HOLD_FULL_MS, TYPE_DELAY_MS};

/// Text to display after a step and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Type-then-delete cycler over a list of role strings.
#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// Returns `None` for an empty role list.
    pub fn new(roles: Vec<String>) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            role: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn step(&mut self) -> TypingFrame {
        let full = &self.roles[self.role];
        let len = full.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = full.chars().take(self.chars).collect();

        let delay_ms = if !self.deleting && self.chars == len {
            self.deleting = true;
            HOLD_FULL_MS
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            HOLD_EMPTY_MS
        } else if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        TypingFrame { text, delay_ms }
    }
}
