//! # Context
//!
//! Consumers that need a value from an enclosing provider (the toggle a
//! `ToggleOn` should read, for instance) look it up by type in a [`Context`]
//! instead of having it threaded through every call:
//!
//! ```rust
//! use toggler_core::*;
//!
//! let cx = Context::new();
//! let toggle = Toggle::new(ToggleOptions::new());
//!
//! cx.provide(toggle.clone(), || {
//!     let found = use_toggle_context(&cx, "ToggleOn").unwrap();
//!     assert!(found.ptr_eq(&toggle));
//! });
//!
//! assert!(use_toggle_context(&cx, "ToggleOn").is_err());
//! ```
//!
//! Frames nest; the innermost provided value of a type wins. A frame is popped
//! when its `provide` closure returns or unwinds.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Toggle, ToggleError};

/// Provider name reported when a toggle consumer has no enclosing toggle.
pub const TOGGLE_PROVIDER: &str = "Toggle";

#[derive(Default)]
pub struct Context {
    stack: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide<T: 'static, R>(&self, value: T, f: impl FnOnce() -> R) -> R {
        struct Guard<'a>(&'a Context);
        impl Drop for Guard<'_> {
            fn drop(&mut self) {
                self.0.stack.borrow_mut().pop();
            }
        }

        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        self.stack.borrow_mut().push(frame);
        let _guard = Guard(self);
        f()
    }

    pub fn lookup<T: Clone + 'static>(&self) -> Option<T> {
        let stack = self.stack.borrow();
        for frame in stack.iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Some(t.clone());
            }
        }
        None
    }

    /// Like [`lookup`](Context::lookup), but a missing provider is an error
    /// naming both sides.
    pub fn require<T: Clone + 'static>(
        &self,
        consumer: &'static str,
        provider: &'static str,
    ) -> Result<T, ToggleError> {
        self.lookup::<T>()
            .ok_or(ToggleError::OutsideProvider { consumer, provider })
    }

    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }
}

/// The toggle provided by the nearest enclosing `Toggle` provider.
pub fn use_toggle_context(cx: &Context, consumer: &'static str) -> Result<Toggle, ToggleError> {
    cx.require::<Toggle>(consumer, TOGGLE_PROVIDER)
}
