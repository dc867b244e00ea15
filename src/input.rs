//! Turns raw crossterm key events into one `FrameInput` per frame.
//!
//! Instead of acting on each key event individually, the tracker records the
//! frame number of the last press/repeat event for every key. A key counts as
//! held while that stamp is within the hold window, which lets Space and the
//! arrow keys be held together.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol and friends): proper
//!   `Press` / `Repeat` / `Release` events, keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows up as
//!   repeated presses). Keys expire after the hold window of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::FrameInput;

#[derive(Debug)]
pub struct InputTracker {
    /// Each held key mapped to the frame it was last seen on.
    key_frame: HashMap<KeyCode, u64>,
    hold_frames: u64,
    restart: bool,
    quit: bool,
}

impl InputTracker {
    pub fn new(hold_frames: u64) -> Self {
        InputTracker {
            key_frame: HashMap::new(),
            hold_frames,
            restart: false,
            quit: false,
        }
    }

    /// Record one key event seen during `frame`.
    pub fn handle(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code, frame);
                match event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                        self.restart = true
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= self.hold_frames)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|&k| self.is_held(k, frame))
    }

    /// Sample the input for `frame`. One-shot signals (restart, quit) are
    /// consumed by the call.
    pub fn snapshot(&mut self, frame: u64) -> FrameInput {
        let left = self.any_held(
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        );
        let right = self.any_held(
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        );
        let fire = self.is_held(KeyCode::Char(' '), frame);

        FrameInput {
            left,
            right,
            fire,
            restart: std::mem::take(&mut self.restart),
            quit: std::mem::take(&mut self.quit),
        }
    }
}
