#![forbid(unsafe_code)]

//! Fixed key-sequence detection over the host's key-press stream.
//!
//! [`SequenceDetector`] watches for an ordered sequence of key codes in the
//! stream of press events, keeping a rolling window of the most recent keys.
//! The classic use is the hidden unlock code on the profile view, but the
//! detector is target-agnostic.
//!
//! # Invariants
//!
//! 1. Only `Press` events advance the window; repeats and releases are
//!    ignored, as are modifier keys held during a press.
//! 2. The window never holds more keys than the target sequence.
//! 3. A completed match clears the window, so the detector re-arms and the
//!    sequence must be typed in full again to fire a second time.
//! 4. An empty target sequence never fires.

use std::collections::VecDeque;

use crate::event::{KeyCode, KeyEvent, KeyEventKind};

/// Stateful detector for a fixed key sequence.
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    target: Vec<KeyCode>,
    window: VecDeque<KeyCode>,
}

impl SequenceDetector {
    /// Create a detector for the given target sequence.
    #[must_use]
    pub fn new(target: impl Into<Vec<KeyCode>>) -> Self {
        let target = target.into();
        let capacity = target.len();
        Self {
            target,
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// The classic arrow/letter unlock sequence, terminated by Enter.
    #[must_use]
    pub fn konami() -> Self {
        use KeyCode::{Char, Down, Enter, Left, Right, Up};
        Self::new([
            Up,
            Up,
            Down,
            Down,
            Left,
            Right,
            Left,
            Right,
            Char('b'),
            Char('a'),
            Enter,
        ])
    }

    /// Feed one key event; returns true exactly when the sequence completes.
    pub fn process(&mut self, event: &KeyEvent) -> bool {
        if event.kind != KeyEventKind::Press || self.target.is_empty() {
            return false;
        }

        if self.window.len() == self.target.len() {
            self.window.pop_front();
        }
        self.window.push_back(event.code);

        if self.window.len() == self.target.len() && self.window.iter().eq(self.target.iter()) {
            self.window.clear();
            return true;
        }
        false
    }

    /// Discard any partial progress.
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// The sequence this detector is armed for.
    #[must_use]
    pub fn target(&self) -> &[KeyCode] {
        &self.target
    }
}
