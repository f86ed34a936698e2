use toggler_core::{ElementProps, use_toggle_context};

use crate::{ChildId, Component, Context, Output, ToggleConsumer, ToggleError};

/// Plain text; knows nothing about toggles.
#[derive(Clone, Debug)]
pub struct Text(pub String);

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Component for Text {
    fn render(&self, _cx: &Context) -> Result<Output, ToggleError> {
        Ok(Output::Text(self.0.clone()))
    }
}

/// Plain container. Consumers nested inside still reach the provider.
#[derive(Default)]
pub struct Row(pub Vec<Box<dyn Component>>);

impl Row {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self(children)
    }
}

impl Component for Row {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
        let children = self
            .0
            .iter()
            .map(|c| c.render(cx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Output::Group(children))
    }
}

/// Renders its child only while the toggle is on.
pub struct ToggleOn(Box<dyn Component>);

impl ToggleOn {
    pub fn new(child: impl Component + 'static) -> Self {
        Self(Box::new(child))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Text::new(text))
    }
}

impl Component for ToggleOn {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
        let toggle = use_toggle_context(cx, self.name())?;
        if toggle.on() {
            self.0.render(cx)
        } else {
            Ok(Output::Nothing)
        }
    }
}

impl ToggleConsumer for ToggleOn {
    fn name(&self) -> &'static str {
        "ToggleOn"
    }
}

/// Renders its child only while the toggle is off.
pub struct ToggleOff(Box<dyn Component>);

impl ToggleOff {
    pub fn new(child: impl Component + 'static) -> Self {
        Self(Box::new(child))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Text::new(text))
    }
}

impl Component for ToggleOff {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
        let toggle = use_toggle_context(cx, self.name())?;
        if toggle.on() {
            Ok(Output::Nothing)
        } else {
            self.0.render(cx)
        }
    }
}

impl ToggleConsumer for ToggleOff {
    fn name(&self) -> &'static str {
        "ToggleOff"
    }
}

/// A switch wired to the toggle. Extra props are passed through.
#[derive(Clone, Default)]
pub struct ToggleButton {
    props: ElementProps,
}

impl ToggleButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_props(props: ElementProps) -> Self {
        Self { props }
    }
}

impl Component for ToggleButton {
    fn render(&self, cx: &Context) -> Result<Output, ToggleError> {
        let toggle = use_toggle_context(cx, self.name())?;
        let mut props = self.props.clone();
        if let Some(ChildId(id)) = cx.lookup::<ChildId>() {
            props.attributes.entry("id".to_string()).or_insert(id);
        }
        Ok(Output::Switch(toggle.toggler_props(props)))
    }
}

impl ToggleConsumer for ToggleButton {
    fn name(&self) -> &'static str {
        "ToggleButton"
    }
}
