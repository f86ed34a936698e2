use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

pub type Handler = Rc<dyn Fn()>;

/// Combines handlers into one that calls each present handler in order.
pub fn call_all<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Option<Handler>>,
{
    let handlers: SmallVec<[Handler; 2]> = handlers.into_iter().flatten().collect();
    Rc::new(move || {
        for h in &handlers {
            h();
        }
    })
}

/// Props handed to whatever element renders a toggler or resetter.
///
/// `attributes` carries everything the builders do not interpret (ids,
/// labels, test ids) and is passed through verbatim.
#[derive(Clone, Default)]
pub struct ElementProps {
    pub aria_pressed: Option<bool>,
    pub on_click: Option<Handler>,
    pub attributes: BTreeMap<String, String>,
}

impl ElementProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aria_pressed(mut self, pressed: bool) -> Self {
        self.aria_pressed = Some(pressed);
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Simulates a click. Returns `false` when no handler is attached.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(h) => {
                h();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ElementProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementProps")
            .field("aria_pressed", &self.aria_pressed)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("attributes", &self.attributes)
            .finish()
    }
}
