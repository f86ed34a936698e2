use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::ToggleError;

/// The whole state of a toggle: a single boolean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub const OFF: ToggleState = ToggleState { on: false };
    pub const ON: ToggleState = ToggleState { on: true };

    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        Self { on }
    }
}

/// Textual kind of an action, as carried by [`Action::kind`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Toggle,
    Reset,
    Custom(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Toggle => "toggle",
            ActionKind::Reset => "reset",
            ActionKind::Custom(kind) => kind,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "toggle" => ActionKind::Toggle,
            "reset" => ActionKind::Reset,
            other => ActionKind::Custom(other.to_string()),
        })
    }
}

/// A request to change a [`ToggleState`].
///
/// `Toggle` and `Reset` are the only actions the built-in reducer accepts and
/// the only ones the manager ever produces. `Custom` exists for callers that
/// swap in their own reducer and dispatch their own action kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Action {
    Toggle,
    Reset { initial_state: ToggleState },
    Custom { kind: String },
}

impl Action {
    pub fn custom(kind: impl Into<String>) -> Self {
        Action::Custom { kind: kind.into() }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Toggle => ActionKind::Toggle,
            Action::Reset { .. } => ActionKind::Reset,
            Action::Custom { kind } => ActionKind::Custom(kind.clone()),
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, Action::Toggle)
    }
}

/// Transition function shared by every manager and hook.
pub type Reducer = Rc<dyn Fn(&ToggleState, &Action) -> Result<ToggleState, ToggleError>>;

/// Built-in reducer: flips on `Toggle`, restores the carried initial state on
/// `Reset`, rejects everything else.
pub fn toggle_reducer(state: &ToggleState, action: &Action) -> Result<ToggleState, ToggleError> {
    match action {
        Action::Toggle => Ok(ToggleState { on: !state.on }),
        Action::Reset { initial_state } => Ok(*initial_state),
        Action::Custom { kind } => Err(ToggleError::unsupported(kind.clone())),
    }
}

pub fn default_reducer() -> Reducer {
    Rc::new(toggle_reducer)
}
