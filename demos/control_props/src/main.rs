use std::cell::Cell;
use std::rc::Rc;

use toggler_core::prelude::*;

const CLICK_LIMIT: u32 = 4;

/// Two toggles controlled by one shared value, plus an uncontrolled one.
struct App {
    both_on: Rc<Cell<Option<bool>>>,
    times_clicked: Rc<Cell<u32>>,
    diagnostics: Diagnostics,
}

struct Screen {
    controlled: [ElementProps; 2],
    uncontrolled: ElementProps,
    reset: ElementProps,
    status: String,
}

impl App {
    fn new(diagnostics: Diagnostics) -> Self {
        Self {
            both_on: Rc::new(Cell::new(Some(false))),
            times_clicked: Rc::new(Cell::new(0)),
            diagnostics,
        }
    }

    fn handle_toggle_change(&self) -> impl Fn(&ToggleState, &Action) + use<> {
        let both_on = self.both_on.clone();
        let times_clicked = self.times_clicked.clone();
        move |state, action| {
            if action.is_toggle() && times_clicked.get() > CLICK_LIMIT {
                return;
            }
            both_on.set(Some(state.on));
            times_clicked.set(times_clicked.get() + 1);
        }
    }

    fn toggle(&self, key: &str, options: ToggleOptions) -> ElementProps {
        let toggle = use_toggle_with_key(key, options, self.diagnostics.clone());
        toggle.toggler_props(ElementProps::new().attr("id", key))
    }

    fn render(&self) -> Screen {
        let _pass = ComposeGuard::begin();
        let both_on = self.both_on.get();

        let controlled = ["left", "right"].map(|key| {
            self.toggle(
                key,
                ToggleOptions::new()
                    .controlled(both_on)
                    .on_change(self.handle_toggle_change()),
            )
        });
        let uncontrolled = self.toggle(
            "uncontrolled",
            ToggleOptions::new().on_change(|state, action| {
                log::info!("Uncontrolled Toggle onChange {state:?} {action:?}")
            }),
        );

        let reset = ElementProps::new().on_click({
            let both_on = self.both_on.clone();
            let times_clicked = self.times_clicked.clone();
            move || {
                both_on.set(None);
                times_clicked.set(0);
            }
        });

        let status = if self.times_clicked.get() > CLICK_LIMIT {
            "Whoa, you clicked too much!".to_string()
        } else {
            format!("Click count: {}", self.times_clicked.get())
        };

        Screen {
            controlled,
            uncontrolled,
            reset,
            status,
        }
    }
}

fn describe(screen: &Screen) -> String {
    let pressed = |p: &ElementProps| match p.aria_pressed {
        Some(true) => "on",
        _ => "off",
    };
    format!(
        "[{}] [{}] {} | uncontrolled: [{}]",
        pressed(&screen.controlled[0]),
        pressed(&screen.controlled[1]),
        screen.status,
        pressed(&screen.uncontrolled)
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = App::new(Diagnostics::default());
    println!("{}", describe(&app.render()));

    for i in 0..7 {
        let screen = app.render();
        screen.controlled[i % 2].click();
        println!("{}", describe(&app.render()));
    }

    app.render().reset.click();
    println!("{}", describe(&app.render()));

    app.render().uncontrolled.click();
    println!("{}", describe(&app.render()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, RecordingSink) {
        toggler_core::reset_composer();
        let sink = RecordingSink::new();
        let app = App::new(Diagnostics::new(DiagnosticsMode::Development, sink.clone()));
        (app, sink)
    }

    #[test]
    fn controlled_toggles_move_together() {
        let (app, _) = app();
        app.render().controlled[0].click();
        let screen = app.render();
        assert_eq!(describe(&screen), "[on] [on] Click count: 1 | uncontrolled: [off]");
        screen.controlled[1].click();
        assert_eq!(
            describe(&app.render()),
            "[off] [off] Click count: 2 | uncontrolled: [off]"
        );
    }

    #[test]
    fn stops_after_too_many_clicks() {
        let (app, _) = app();
        for _ in 0..5 {
            app.render().controlled[0].click();
        }
        let screen = app.render();
        assert_eq!(screen.status, "Whoa, you clicked too much!");
        let before = screen.controlled[0].aria_pressed;

        screen.controlled[0].click();
        let screen = app.render();
        assert_eq!(screen.controlled[0].aria_pressed, before);
        assert_eq!(app.times_clicked.get(), 5);
    }

    #[test]
    fn reset_releases_control_and_warns() {
        let (app, sink) = app();
        app.render().controlled[0].click();
        app.render().reset.click();
        let screen = app.render();
        assert_eq!(screen.status, "Click count: 0");

        let switches: Vec<_> = sink
            .take()
            .into_iter()
            .filter(|a| matches!(a, Advisory::ModeSwitch { .. }))
            .collect();
        assert_eq!(switches.len(), 2);
        // the next pass does not repeat the advisory
        app.render();
        assert!(sink.is_empty());
    }

    #[test]
    fn uncontrolled_keeps_its_own_state() {
        let (app, sink) = app();
        app.render().uncontrolled.click();
        let screen = app.render();
        assert_eq!(screen.uncontrolled.aria_pressed, Some(true));
        assert_eq!(screen.controlled[0].aria_pressed, Some(false));
        assert!(sink.is_empty());
    }
}
