use crate::{
    Diagnostics, SlotKey, Toggle, ToggleOptions, next_slot, remember_toggle, remembered_toggle,
};

/// Hook form of [`Toggle`]: call it once per composition pass with that
/// pass's options.
///
/// The first pass builds the manager; later passes hand the new options to
/// [`Toggle::set_props`] on the remembered instance, which is what drives the
/// controlled/uncontrolled advisories.
///
/// ```rust
/// use toggler_core::*;
///
/// let first = { let _g = ComposeGuard::begin(); use_toggle(ToggleOptions::new()) };
/// first.toggle().unwrap();
///
/// let second = { let _g = ComposeGuard::begin(); use_toggle(ToggleOptions::new()) };
/// assert!(second.ptr_eq(&first));
/// assert!(second.on());
/// ```
pub fn use_toggle(options: ToggleOptions) -> Toggle {
    use_toggle_with_diagnostics(options, Diagnostics::default())
}

/// `diagnostics` is only consulted on the first pass.
pub fn use_toggle_with_diagnostics(options: ToggleOptions, diagnostics: Diagnostics) -> Toggle {
    bind(next_slot(), options, diagnostics)
}

/// Key-based variant, stable across conditional branches.
pub fn use_toggle_with_key(
    key: impl Into<String>,
    options: ToggleOptions,
    diagnostics: Diagnostics,
) -> Toggle {
    bind(SlotKey::Named(key.into()), options, diagnostics)
}

fn bind(key: SlotKey, options: ToggleOptions, diagnostics: Diagnostics) -> Toggle {
    if let Some(toggle) = remembered_toggle(&key) {
        toggle.set_props(options);
        return toggle;
    }
    let toggle = Toggle::with_diagnostics(options, diagnostics);
    remember_toggle(key, toggle.clone());
    toggle
}
