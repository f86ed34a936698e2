//! # Development advisories
//!
//! A toggle never fails because of how it is wired; it only warns. The two
//! warnings ("read-only field" and "changing from controlled to
//! uncontrolled") are [`Advisory`] values pushed into a [`DiagnosticsSink`].
//!
//! By default advisories go to the `log` facade under the
//! `toggler::diagnostics` target. Tests swap in a [`RecordingSink`] and assert
//! on what was emitted:
//!
//! ```rust
//! use toggler_core::*;
//!
//! let sink = RecordingSink::new();
//! let diagnostics = Diagnostics::new(DiagnosticsMode::Development, sink.clone());
//! let _toggle = Toggle::with_diagnostics(ToggleOptions::new().on(true), diagnostics);
//!
//! assert_eq!(sink.take(), vec![Advisory::ReadOnly]);
//! ```
//!
//! In [`DiagnosticsMode::Production`] nothing is ever emitted.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Mode;

pub const LOG_TARGET: &str = "toggler::diagnostics";

/// Environment variable consulted by [`DiagnosticsMode::from_env`].
pub const ENV_VAR: &str = "TOGGLER_ENV";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    /// Controlled without `on_change` and not marked read-only.
    ReadOnly,
    /// Mode differs from the one captured at construction.
    ModeSwitch {
        component: String,
        prop: String,
        from: Mode,
        to: Mode,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ReadOnly => f.write_str(
                "Warning: Failed prop type: You provided a `on` prop to a form field without an \
                 `onChange` handler. This will render a read-only field. If the field should be \
                 mutable use `defaultValue`. Otherwise, set either `onChange` or `readOnly`.",
            ),
            Advisory::ModeSwitch {
                component,
                prop,
                from,
                to,
            } => write!(
                f,
                "Warning: {component} is changing from {from} to {to}. Check the prop '{prop}'"
            ),
        }
    }
}

pub trait DiagnosticsSink: 'static {
    fn emit(&self, advisory: &Advisory);
}

/// Routes advisories to `log::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn emit(&self, advisory: &Advisory) {
        log::warn!(target: LOG_TARGET, "{advisory}");
    }
}

/// Keeps every advisory in memory. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    seen: Rc<RefCell<Vec<Advisory>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.seen.borrow().clone()
    }

    pub fn take(&self) -> Vec<Advisory> {
        std::mem::take(&mut *self.seen.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn emit(&self, advisory: &Advisory) {
        self.seen.borrow_mut().push(advisory.clone());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticsMode {
    Development,
    Production,
}

impl DiagnosticsMode {
    /// Reads [`ENV_VAR`]; falls back to the build profile when unset.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::from_build(),
        }
    }

    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            DiagnosticsMode::Development
        } else {
            DiagnosticsMode::Production
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => DiagnosticsMode::Production,
            _ => DiagnosticsMode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == DiagnosticsMode::Production
    }
}

impl Default for DiagnosticsMode {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Mode flag plus the sink advisories are written to.
#[derive(Clone)]
pub struct Diagnostics {
    mode: DiagnosticsMode,
    sink: Rc<dyn DiagnosticsSink>,
}

impl Diagnostics {
    pub fn new(mode: DiagnosticsMode, sink: impl DiagnosticsSink) -> Self {
        Self {
            mode,
            sink: Rc::new(sink),
        }
    }

    /// Mode taken from [`DiagnosticsMode::from_env`].
    pub fn with_sink(sink: impl DiagnosticsSink) -> Self {
        Self::new(DiagnosticsMode::from_env(), sink)
    }

    pub fn production() -> Self {
        Self::new(DiagnosticsMode::Production, LogSink)
    }

    pub fn mode(&self) -> DiagnosticsMode {
        self.mode
    }

    pub fn enabled(&self) -> bool {
        !self.mode.is_production()
    }

    pub fn emit(&self, advisory: Advisory) {
        if self.enabled() {
            self.sink.emit(&advisory);
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_sink(LogSink)
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("mode", &self.mode)
            .field("sink", &"...")
            .finish()
    }
}

/// Runs a check only when its dependency key changes, like an effect with a
/// dependency list. The first evaluation always runs.
#[derive(Debug)]
pub(crate) struct EffectKey<K: PartialEq> {
    last: Option<K>,
}

impl<K: PartialEq> EffectKey<K> {
    pub(crate) fn new() -> Self {
        Self { last: None }
    }

    /// Returns `true` when `key` differs from the previous one.
    pub(crate) fn changed(&mut self, key: K) -> bool {
        if self.last.as_ref() == Some(&key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_texts() {
        insta::assert_snapshot!(
            Advisory::ReadOnly.to_string(),
            @"Warning: Failed prop type: You provided a `on` prop to a form field without an `onChange` handler. This will render a read-only field. If the field should be mutable use `defaultValue`. Otherwise, set either `onChange` or `readOnly`."
        );
        insta::assert_snapshot!(
            Advisory::ModeSwitch {
                component: "useToggle".into(),
                prop: "on".into(),
                from: Mode::Controlled,
                to: Mode::Uncontrolled,
            }
            .to_string(),
            @"Warning: useToggle is changing from controlled to uncontrolled. Check the prop 'on'"
        );
    }

    #[test]
    fn production_mode_swallows_everything() {
        let sink = RecordingSink::new();
        let diagnostics = Diagnostics::new(DiagnosticsMode::Production, sink.clone());
        diagnostics.emit(Advisory::ReadOnly);
        assert!(sink.is_empty());

        let diagnostics = Diagnostics::new(DiagnosticsMode::Development, sink.clone());
        diagnostics.emit(Advisory::ReadOnly);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(DiagnosticsMode::parse("production"), DiagnosticsMode::Production);
        assert_eq!(DiagnosticsMode::parse(" PROD "), DiagnosticsMode::Production);
        assert_eq!(DiagnosticsMode::parse("development"), DiagnosticsMode::Development);
        assert_eq!(DiagnosticsMode::parse("test"), DiagnosticsMode::Development);
    }

    #[test]
    fn build_fallback_follows_debug_assertions() {
        let expected = if cfg!(debug_assertions) {
            DiagnosticsMode::Development
        } else {
            DiagnosticsMode::Production
        };
        assert_eq!(DiagnosticsMode::from_build(), expected);
    }

    // The only test in this crate that writes ENV_VAR.
    #[test]
    fn env_var_selects_mode() {
        let read_only_toggle = |sink: &RecordingSink| {
            crate::Toggle::with_diagnostics(
                crate::ToggleOptions::new().on(true),
                Diagnostics::with_sink(sink.clone()),
            )
        };

        unsafe { std::env::set_var(ENV_VAR, "production") };
        assert_eq!(DiagnosticsMode::from_env(), DiagnosticsMode::Production);
        assert_eq!(Diagnostics::default().mode(), DiagnosticsMode::Production);
        assert!(!crate::Toggle::new(crate::ToggleOptions::new()).diagnostics().enabled());
        let sink = RecordingSink::new();
        let toggle = read_only_toggle(&sink);
        toggle.set_props(crate::ToggleOptions::new());
        assert!(sink.is_empty());

        unsafe { std::env::set_var(ENV_VAR, "development") };
        assert_eq!(Diagnostics::default().mode(), DiagnosticsMode::Development);
        let sink = RecordingSink::new();
        let _toggle = read_only_toggle(&sink);
        assert_eq!(sink.take(), vec![Advisory::ReadOnly]);

        unsafe { std::env::remove_var(ENV_VAR) };
        assert_eq!(DiagnosticsMode::from_env(), DiagnosticsMode::from_build());
        assert_eq!(Diagnostics::default().mode(), DiagnosticsMode::from_build());
    }

    #[test]
    fn effect_key_runs_on_change_only() {
        let mut key = EffectKey::new();
        assert!(key.changed((true, false)));
        assert!(!key.changed((true, false)));
        assert!(key.changed((false, false)));
        assert!(key.changed((true, false)));
    }
}
