//! Toggle slots that survive from one composition pass to the next.
//!
//! A pass starts with [`ComposeGuard::begin`]. Inside it, every
//! [`use_toggle`](crate::use_toggle) call claims the next positional slot,
//! and [`use_toggle_with_key`](crate::use_toggle_with_key) claims a named
//! one. Positional slots are matched by call order only, so a pass that skips
//! a hook call shifts every later toggle onto its neighbour's slot. The guard
//! warns when a pass leaves remembered positional slots unclaimed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::Toggle;

thread_local! {
    static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Position(usize),
    Named(String),
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Position(i) => write!(f, "#{i}"),
            SlotKey::Named(key) => write!(f, "'{key}'"),
        }
    }
}

#[derive(Default)]
struct Composer {
    positional: Vec<Option<Toggle>>,
    cursor: usize,
    named: HashMap<String, Toggle>,
}

impl Composer {
    fn get(&self, key: &SlotKey) -> Option<Toggle> {
        match key {
            SlotKey::Position(i) => self.positional.get(*i).cloned().flatten(),
            SlotKey::Named(name) => self.named.get(name).cloned(),
        }
    }

    fn insert(&mut self, key: SlotKey, toggle: Toggle) {
        log::debug!("toggle slot {key} created ({})", toggle.mode());
        match key {
            SlotKey::Position(i) => {
                if i >= self.positional.len() {
                    self.positional.resize_with(i + 1, || None);
                }
                self.positional[i] = Some(toggle);
            }
            SlotKey::Named(name) => {
                self.named.insert(name, toggle);
            }
        }
    }
}

/// Marks one composition pass: positional slots are claimed from the first
/// one again.
pub struct ComposeGuard {
    _private: (),
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| c.borrow_mut().cursor = 0);
        ComposeGuard { _private: () }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        let (claimed, remembered) = COMPOSER.with(|c| {
            let c = c.borrow();
            (c.cursor, c.positional.len())
        });
        if claimed < remembered {
            log::warn!(
                "compose pass claimed {claimed} of {remembered} remembered toggle slots; \
                 later toggles may have shifted slots. \
                 If this is due to conditional composition, prefer use_toggle_with_key."
            );
        }
    }
}

/// Claims the next positional slot of the current pass.
pub fn next_slot() -> SlotKey {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let i = c.cursor;
        c.cursor += 1;
        SlotKey::Position(i)
    })
}

/// The toggle remembered under `key`, if any.
pub fn remembered_toggle(key: &SlotKey) -> Option<Toggle> {
    COMPOSER.with(|c| c.borrow().get(key))
}

pub fn remember_toggle(key: SlotKey, toggle: Toggle) {
    COMPOSER.with(|c| c.borrow_mut().insert(key, toggle));
}

/// Number of remembered toggles, positional and named.
pub fn remembered_count() -> usize {
    COMPOSER.with(|c| {
        let c = c.borrow();
        c.positional.iter().flatten().count() + c.named.len()
    })
}

/// Drops every remembered toggle on this thread.
pub fn reset_composer() {
    COMPOSER.with(|c| *c.borrow_mut() = Composer::default());
}
