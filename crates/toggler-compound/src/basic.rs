//! Compound toggle with a flat, declared list of children.

use toggler_core::ToggleOptions;

use crate::{Child, ChildId, Component, Context, Output, ToggleError};

/// Owns an uncontrolled toggle and renders a flat list of children.
///
/// [`Child::Consumer`] children are rendered with the toggle and a
/// `ChildId("i-am-child-{index}")` provided; [`Child::Plain`] children are
/// rendered as they are.
pub struct Toggle {
    state: toggler_core::Toggle,
    children: Vec<Child>,
}

impl Toggle {
    pub fn new(children: Vec<Child>) -> Self {
        Self::with_state(toggler_core::Toggle::new(ToggleOptions::new()), children)
    }

    pub fn with_state(state: toggler_core::Toggle, children: Vec<Child>) -> Self {
        Self { state, children }
    }

    pub fn state(&self) -> &toggler_core::Toggle {
        &self.state
    }
}

impl Component for Toggle {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
        let mut out = Vec::with_capacity(self.children.len());
        for (index, child) in self.children.iter().enumerate() {
            let rendered = match child {
                Child::Consumer(c) => cx.provide(self.state.clone(), || {
                    cx.provide(ChildId(format!("i-am-child-{index}")), || {
                        log::trace!("{} rendered as child {index}", c.name());
                        c.render(cx)
                    })
                })?,
                Child::Plain(c) => c.render(cx)?,
            };
            out.push(rendered);
        }
        Ok(Output::Group(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Text, ToggleButton, ToggleOff, ToggleOn};
    use toggler_core::use_toggle_context;

    fn app() -> Toggle {
        Toggle::new(vec![
            Child::consumer(ToggleOn::text("The button is on")),
            Child::consumer(ToggleOff::text("The button is off")),
            Child::consumer(ToggleButton::new()),
            Child::plain(Text::new("Hello")),
        ])
    }

    #[test]
    fn renders_off_then_on() {
        let cx = Context::new();
        let toggle = app();

        let out = toggle.render(&cx).unwrap();
        assert_eq!(out.to_string(), "The button is off [switch#i-am-child-2 off] Hello");

        out.switches()[0].click();
        let out = toggle.render(&cx).unwrap();
        assert_eq!(out.to_string(), "The button is on [switch#i-am-child-2 on] Hello");
        assert!(toggle.state().on());
    }

    #[test]
    fn plain_children_do_not_see_the_toggle() {
        struct Peek;
        impl Component for Peek {
            fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
                use_toggle_context(cx, "Peek").map(|_| Output::Nothing)
            }
        }

        let cx = Context::new();
        let toggle = Toggle::new(vec![Child::plain(Peek)]);
        let err = toggle.render(&cx).unwrap_err();
        assert_eq!(
            err,
            ToggleError::OutsideProvider {
                consumer: "Peek",
                provider: "Toggle",
            }
        );
    }
}
