//! Compound toggle that shares its state with the whole subtree.

use toggler_core::ToggleOptions;

use crate::{Component, Context, Output, ToggleError};

/// Provides an uncontrolled toggle to every descendant, at any depth.
pub struct Toggle {
    state: toggler_core::Toggle,
    children: Vec<Box<dyn Component>>,
}

impl Toggle {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self::with_state(toggler_core::Toggle::new(ToggleOptions::new()), children)
    }

    pub fn with_state(state: toggler_core::Toggle, children: Vec<Box<dyn Component>>) -> Self {
        Self { state, children }
    }

    pub fn state(&self) -> &toggler_core::Toggle {
        &self.state
    }
}

impl Component for Toggle {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
        cx.provide(self.state.clone(), || {
            let children = self
                .children
                .iter()
                .map(|c| c.render(cx))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Output::Group(children))
        })
    }
}
