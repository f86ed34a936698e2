//! Compound toggle components.
//!
//! A compound component is a parent that shares state with a set of children
//! written to cooperate with it. Here the state is a
//! [`toggler_core::Toggle`] and the children are [`ToggleOn`], [`ToggleOff`]
//! and [`ToggleButton`].
//!
//! Children never receive the toggle by argument. The parent provides it in
//! the [`Context`] and children look it up; a child rendered outside any
//! provider fails with [`ToggleError::OutsideProvider`].
//!
//! Two parents are available:
//!
//! - [`basic::Toggle`] renders a flat list of [`Child`]ren. Only children
//!   declared as [`Child::Consumer`] see the toggle; each also gets a
//!   positional [`ChildId`].
//! - [`flexible::Toggle`] provides the toggle to its whole subtree, so
//!   consumers can sit at any depth inside ordinary components.
//!
//! ```rust
//! use toggler_compound::*;
//! use toggler_core::Context;
//!
//! let toggle = flexible::Toggle::new(vec![
//!     Box::new(ToggleOn::text("The button is on")),
//!     Box::new(ToggleOff::text("The button is off")),
//!     Box::new(ToggleButton::new()),
//! ]);
//! let cx = Context::new();
//!
//! let out = toggle.render(&cx).unwrap();
//! assert_eq!(out.texts(), vec!["The button is off"]);
//!
//! out.switches()[0].click();
//! assert_eq!(toggle.render(&cx).unwrap().texts(), vec!["The button is on"]);
//! ```

pub mod basic;
pub mod components;
pub mod flexible;
pub mod output;

pub use components::*;
pub use output::*;

pub use toggler_core::{Context, ToggleError};

/// Anything that renders into an [`Output`].
pub trait Component {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError>;
}

/// A component that reads the toggle from its provider.
///
/// Implementing this is how a component declares that it belongs inside a
/// toggle; parents never inspect what a child is.
pub trait ToggleConsumer: Component {
    fn name(&self) -> &'static str;
}

/// Positional id handed to consumers by [`basic::Toggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildId(pub String);

/// A child of [`basic::Toggle`].
pub enum Child {
    Consumer(Box<dyn ToggleConsumer>),
    Plain(Box<dyn Component>),
}

impl Child {
    pub fn consumer(c: impl ToggleConsumer + 'static) -> Self {
        Child::Consumer(Box::new(c))
    }

    pub fn plain(c: impl Component + 'static) -> Self {
        Child::Plain(Box::new(c))
    }
}
