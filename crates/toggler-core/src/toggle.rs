use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::diagnostics::EffectKey;
use crate::{
    Action, Advisory, Diagnostics, ElementProps, Handler, Reducer, Signal, SubId, ToggleError,
    ToggleState, call_all, default_reducer,
};

pub type OnChange = Rc<dyn Fn(&ToggleState, &Action)>;

const COMPONENT_NAME: &str = "useToggle";
const PROP_NAME: &str = "on";

/// Who owns the `on` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// The caller supplies `on` and decides what to do with changes.
    Controlled,
    /// The manager keeps `on` itself.
    Uncontrolled,
}

impl Mode {
    pub fn of(controlled: Option<bool>) -> Self {
        Self::from_controlled(controlled.is_some())
    }

    pub fn from_controlled(is_controlled: bool) -> Self {
        if is_controlled {
            Mode::Controlled
        } else {
            Mode::Uncontrolled
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Controlled => "controlled",
            Mode::Uncontrolled => "uncontrolled",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-facing options, used both at construction and on every later
/// [`Toggle::set_props`].
#[derive(Clone, Default)]
pub struct ToggleOptions {
    pub initial_on: bool,
    pub reducer: Option<Reducer>,
    pub on_change: Option<OnChange>,
    pub on: Option<bool>,
    pub read_only: bool,
}

impl ToggleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = on;
        self
    }

    pub fn reducer(
        mut self,
        f: impl Fn(&ToggleState, &Action) -> Result<ToggleState, ToggleError> + 'static,
    ) -> Self {
        self.reducer = Some(Rc::new(f));
        self
    }

    pub fn on_change(mut self, f: impl Fn(&ToggleState, &Action) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Supplying a value makes the toggle controlled.
    pub fn on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// `None` makes the toggle uncontrolled.
    pub fn controlled(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

impl fmt::Debug for ToggleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleOptions")
            .field("initial_on", &self.initial_on)
            .field("reducer", &self.reducer.as_ref().map(|_| "..."))
            .field("on_change", &self.on_change.as_ref().map(|_| "..."))
            .field("on", &self.on)
            .field("read_only", &self.read_only)
            .finish()
    }
}

struct Props {
    controlled: Option<bool>,
    on_change: Option<OnChange>,
    read_only: bool,
    reducer: Reducer,
}

impl Props {
    fn from_options(options: ToggleOptions) -> Self {
        Self {
            controlled: options.on,
            on_change: options.on_change,
            read_only: options.read_only,
            reducer: options.reducer.unwrap_or_else(default_reducer),
        }
    }
}

struct ToggleInner {
    initial_state: ToggleState,
    was_controlled: bool,
    state: Signal<ToggleState>,
    props: RefCell<Props>,
    diagnostics: Diagnostics,
    read_only_check: RefCell<EffectKey<(bool, bool, bool)>>,
    mode_check: RefCell<EffectKey<bool>>,
}

/// A boolean toggle that is either controlled or uncontrolled.
///
/// `Toggle` is a cheap handle; clones refer to the same manager. The current
/// value is re-derived on every [`on`](Toggle::on) call from the latest
/// props, never cached.
///
/// ```rust
/// use toggler_core::*;
///
/// let toggle = Toggle::new(ToggleOptions::new());
/// assert!(!toggle.on());
///
/// toggle.toggle().unwrap();
/// assert!(toggle.on());
///
/// toggle.reset().unwrap();
/// assert!(!toggle.on());
/// ```
#[derive(Clone)]
pub struct Toggle {
    inner: Rc<ToggleInner>,
}

impl Toggle {
    pub fn new(options: ToggleOptions) -> Self {
        Self::with_diagnostics(options, Diagnostics::default())
    }

    pub fn with_diagnostics(options: ToggleOptions, diagnostics: Diagnostics) -> Self {
        let initial_state = ToggleState::new(options.initial_on);
        let was_controlled = options.on.is_some();
        let toggle = Self {
            inner: Rc::new(ToggleInner {
                initial_state,
                was_controlled,
                state: Signal::new(initial_state),
                props: RefCell::new(Props::from_options(options)),
                diagnostics,
                read_only_check: RefCell::new(EffectKey::new()),
                mode_check: RefCell::new(EffectKey::new()),
            }),
        };
        toggle.check_advisories();
        toggle
    }

    /// Applies the props of a later render. `initial_on` is captured once at
    /// construction and ignored here.
    pub fn set_props(&self, options: ToggleOptions) {
        *self.inner.props.borrow_mut() = Props::from_options(options);
        self.check_advisories();
    }

    pub fn on(&self) -> bool {
        let controlled = self.inner.props.borrow().controlled;
        controlled.unwrap_or_else(|| self.inner.state.get().on)
    }

    pub fn state(&self) -> ToggleState {
        ToggleState::new(self.on())
    }

    pub fn mode(&self) -> Mode {
        Mode::of(self.inner.props.borrow().controlled)
    }

    pub fn is_controlled(&self) -> bool {
        self.mode() == Mode::Controlled
    }

    pub fn initial_state(&self) -> ToggleState {
        self.inner.initial_state
    }

    /// Internally held state, regardless of mode.
    pub fn internal_state(&self) -> ToggleState {
        self.inner.state.get()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.inner.diagnostics
    }

    /// Runs `action` through the reducer and reports the result to
    /// `on_change`.
    ///
    /// Internal state only advances when uncontrolled. The state handed to
    /// `on_change` (and returned) is always what the reducer makes of the
    /// currently observed value, so a controlled owner can decide whether to
    /// adopt it.
    pub fn dispatch(&self, action: Action) -> Result<ToggleState, ToggleError> {
        let (reducer, on_change, controlled) = {
            let props = self.inner.props.borrow();
            (
                props.reducer.clone(),
                props.on_change.clone(),
                props.controlled,
            )
        };

        let internal = self.inner.state.get();
        let current = ToggleState {
            on: controlled.unwrap_or(internal.on),
        };

        if controlled.is_none() {
            let next = reducer(&internal, &action)?;
            self.inner.state.set(next);
        }

        let new_state = reducer(&current, &action)?;
        log::trace!(
            "{} {}: {} -> {}",
            Mode::of(controlled),
            action.kind(),
            current.on,
            new_state.on
        );

        if let Some(on_change) = on_change {
            on_change(&new_state, &action);
        }
        Ok(new_state)
    }

    pub fn toggle(&self) -> Result<ToggleState, ToggleError> {
        self.dispatch(Action::Toggle)
    }

    pub fn reset(&self) -> Result<ToggleState, ToggleError> {
        self.dispatch(Action::Reset {
            initial_state: self.inner.initial_state,
        })
    }

    /// Props for the element that flips the toggle.
    ///
    /// The caller's click handler runs first, then `toggle()`. An
    /// `aria_pressed` in `overrides` wins over the observed value.
    pub fn toggler_props(&self, overrides: ElementProps) -> ElementProps {
        let ElementProps {
            aria_pressed,
            on_click,
            attributes,
        } = overrides;
        let this = self.clone();
        let toggle: Handler = Rc::new(move || {
            if let Err(e) = this.toggle() {
                log::error!("toggle failed: {e}");
            }
        });
        ElementProps {
            aria_pressed: Some(aria_pressed.unwrap_or_else(|| self.on())),
            on_click: Some(call_all([on_click, Some(toggle)])),
            attributes,
        }
    }

    /// Props for the element that resets the toggle.
    pub fn resetter_props(&self, overrides: ElementProps) -> ElementProps {
        let ElementProps {
            aria_pressed,
            on_click,
            attributes,
        } = overrides;
        let this = self.clone();
        let reset: Handler = Rc::new(move || {
            if let Err(e) = this.reset() {
                log::error!("reset failed: {e}");
            }
        });
        ElementProps {
            aria_pressed,
            on_click: Some(call_all([on_click, Some(reset)])),
            attributes,
        }
    }

    /// Observes writes to the internal state (uncontrolled transitions).
    pub fn subscribe(&self, f: impl Fn(&ToggleState) + 'static) -> SubId {
        self.inner.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.inner.state.unsubscribe(id);
    }

    pub fn ptr_eq(&self, other: &Toggle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn check_advisories(&self) {
        let diagnostics = &self.inner.diagnostics;
        if !diagnostics.enabled() {
            return;
        }

        let (has_on_change, is_controlled, read_only) = {
            let props = self.inner.props.borrow();
            (
                props.on_change.is_some(),
                props.controlled.is_some(),
                props.read_only,
            )
        };

        let read_only_due = self
            .inner
            .read_only_check
            .borrow_mut()
            .changed((has_on_change, is_controlled, read_only));
        if read_only_due && is_controlled && !has_on_change && !read_only {
            diagnostics.emit(Advisory::ReadOnly);
        }

        let was_controlled = self.inner.was_controlled;
        let mode_due = self.inner.mode_check.borrow_mut().changed(is_controlled);
        if mode_due && was_controlled != is_controlled {
            diagnostics.emit(Advisory::ModeSwitch {
                component: COMPONENT_NAME.to_string(),
                prop: PROP_NAME.to_string(),
                from: Mode::from_controlled(was_controlled),
                to: Mode::from_controlled(is_controlled),
            });
        }
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("on", &self.on())
            .field("mode", &self.mode())
            .field("initial_state", &self.inner.initial_state)
            .finish()
    }
}
