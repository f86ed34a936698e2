use std::fmt;

use toggler_core::ElementProps;

/// What a component rendered to.
#[derive(Clone, Debug, Default)]
pub enum Output {
    #[default]
    Nothing,
    Text(String),
    Switch(ElementProps),
    Group(Vec<Output>),
}

impl Output {
    /// Every text leaf, depth first.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |o| {
            if let Output::Text(t) = o {
                out.push(t.as_str());
            }
        });
        out
    }

    /// Every switch leaf, depth first.
    pub fn switches(&self) -> Vec<&ElementProps> {
        let mut out = Vec::new();
        self.walk(&mut |o| {
            if let Output::Switch(p) = o {
                out.push(p);
            }
        });
        out
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Output)) {
        f(self);
        if let Output::Group(children) = self {
            for c in children {
                c.walk(f);
            }
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Nothing => Ok(()),
            Output::Text(t) => f.write_str(t),
            Output::Switch(p) => {
                let state = match p.aria_pressed {
                    Some(true) => "on",
                    Some(false) => "off",
                    None => "?",
                };
                match p.get_attr("id") {
                    Some(id) => write!(f, "[switch#{id} {state}]"),
                    None => write!(f, "[switch {state}]"),
                }
            }
            Output::Group(children) => {
                let mut first = true;
                for rendered in children.iter().map(Output::to_string) {
                    if rendered.is_empty() {
                        continue;
                    }
                    if !first {
                        f.write_str(" ")?;
                    }
                    first = false;
                    f.write_str(&rendered)?;
                }
                Ok(())
            }
        }
    }
}
