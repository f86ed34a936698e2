//! # Toggles, controlled and uncontrolled
//!
//! Toggler's core is a single piece of state, a boolean `on`, and the rules
//! for who owns it:
//!
//! - `Toggle` — the manager. Uncontrolled by default, it keeps `on` itself.
//!   Hand it an `on` value and it becomes controlled: it still computes what
//!   the next state would be and reports it through `on_change`, but the
//!   caller decides whether to adopt it.
//! - `use_toggle` — the same manager bound to a composition slot, so it
//!   survives from one composition pass to the next.
//! - `Context` — typed provider/consumer lookup used by compound components.
//!
//! ## Uncontrolled
//!
//! ```rust
//! use toggler_core::*;
//!
//! let toggle = Toggle::new(ToggleOptions::new().initial_on(true));
//! toggle.toggle().unwrap();
//! assert!(!toggle.on());
//! ```
//!
//! ## Controlled
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use toggler_core::*;
//!
//! let owned = Rc::new(Cell::new(false));
//! let toggle = Toggle::new(ToggleOptions::new().on(owned.get()).on_change({
//!     let owned = owned.clone();
//!     move |state, _action| owned.set(state.on)
//! }));
//!
//! toggle.toggle().unwrap();
//! assert!(owned.get());      // the owner adopted the change
//! assert!(!toggle.on());     // but the toggle shows what it was given
//! ```
//!
//! ## Custom reducers
//!
//! The transition function can be replaced wholesale. Delegating to
//! `toggle_reducer` for everything you don't override is the usual shape:
//!
//! ```rust
//! use toggler_core::*;
//!
//! let sticky = Toggle::new(ToggleOptions::new().reducer(|state, action| {
//!     if state.on && action.is_toggle() {
//!         return Ok(*state);
//!     }
//!     toggle_reducer(state, action)
//! }));
//! sticky.toggle().unwrap();
//! sticky.toggle().unwrap();
//! assert!(sticky.on());
//! ```
//!
//! Wiring mistakes (controlled without `on_change`, switching between
//! controlled and uncontrolled) are reported as advisories, see
//! [`diagnostics`].

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod hook;
pub mod prelude;
pub mod props;
pub mod runtime;
pub mod signal;
pub mod state;
pub mod toggle;

pub use context::*;
pub use diagnostics::{
    Advisory, Diagnostics, DiagnosticsMode, DiagnosticsSink, LogSink, RecordingSink,
};
pub use error::*;
pub use hook::*;
pub use props::*;
pub use runtime::*;
pub use signal::*;
pub use state::*;
pub use toggle::*;
