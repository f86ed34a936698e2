use toggler_compound::{
    Child, Component, Output, Row, Text, ToggleButton, ToggleOff, ToggleOn, basic, flexible,
};
use toggler_core::{Context, ElementProps};

fn click_first_switch(out: &Output) -> anyhow::Result<()> {
    let switch = out
        .switches()
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no switch rendered"))?;
    switch.click();
    Ok(())
}

fn run(name: &str, root: &dyn Component, cx: &Context) -> anyhow::Result<()> {
    let out = root.render(cx)?;
    println!("{name}: {out}");
    click_first_switch(&out)?;
    println!("{name}: {}", root.render(cx)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cx = Context::new();

    let basic = basic::Toggle::new(vec![
        Child::consumer(ToggleOn::text("The button is on")),
        Child::consumer(ToggleOff::text("The button is off")),
        Child::consumer(ToggleButton::new()),
        Child::plain(Text::new("Hello")),
    ]);
    run("compound", &basic, &cx)?;

    let flexible = flexible::Toggle::new(vec![
        Box::new(ToggleOn::text("The button is on")),
        Box::new(ToggleOff::text("The button is off")),
        Box::new(Row::new(vec![
            Box::new(Text::new("Toggle:")),
            Box::new(ToggleButton::with_props(
                ElementProps::new().attr("aria-label", "custom-button"),
            )),
        ])),
    ]);
    run("flexible", &flexible, &cx)?;

    match ToggleButton::new().render(&cx) {
        Ok(_) => log::warn!("button rendered without a provider"),
        Err(e) => println!("outside provider: {e}"),
    }
    Ok(())
}
