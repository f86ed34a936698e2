pub use crate::context::{Context, use_toggle_context};
pub use crate::diagnostics::{Advisory, Diagnostics, DiagnosticsMode, LogSink, RecordingSink};
pub use crate::error::ToggleError;
pub use crate::hook::{use_toggle, use_toggle_with_diagnostics, use_toggle_with_key};
pub use crate::props::{ElementProps, Handler, call_all};
pub use crate::runtime::{ComposeGuard, SlotKey, reset_composer};
pub use crate::state::{Action, ActionKind, Reducer, ToggleState, toggle_reducer};
pub use crate::toggle::{Mode, OnChange, Toggle, ToggleOptions};
