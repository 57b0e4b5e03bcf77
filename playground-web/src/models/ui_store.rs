use shared::models::{Theme, UiPreferences};
use web_sys::window;
use yew::{hook, use_effect_with};
use yewdux::Store;
use yewdux::prelude::use_selector;

/// Page-lifetime UI preferences shared by every route.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct UiStore {
    pub prefs: UiPreferences,
}

impl UiStore {
    pub fn toggle_theme(&mut self) {
        self.prefs.toggle_theme();
    }

    pub fn toggle_hints(&mut self) {
        self.prefs.toggle_hints();
    }

    pub fn increment_clicks(&mut self) {
        self.prefs.increment_clicks();
    }
}

pub(crate) fn apply_theme_class(theme: Theme) {
    if let Some(root) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("unable to toggle dark class: {err:?}");
        }
    }
}

/// Keep the `dark` class on `<html>` in sync with the theme.
#[hook]
pub fn use_document_theme() {
    let theme = use_selector(|state: &UiStore| state.prefs.theme);
    use_effect_with(*theme, |theme| {
        apply_theme_class(*theme);
        || ()
    });
}
