use crate::models::ui_store::UiStore;
use shared::models::Theme;
use yew::{Callback, Classes, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (ui, dispatch) = use_store::<UiStore>();

    let toggle_theme: Callback<MouseEvent> =
        dispatch.reduce_mut_callback(|state| state.toggle_theme());

    // Sun in dark mode (switch to light), moon in light mode (switch to dark)
    let theme_icon = match ui.prefs.theme {
        Theme::Light => IconId::HeroiconsSolidMoon,
        Theme::Dark => IconId::HeroiconsSolidSun,
    };
    let label = format!("Switch to {} theme", ui.prefs.theme.toggled());

    html! {
        <div class={props.class.clone()}>
            <button
                type="button"
                class="rounded-lg border border-slate-200 px-3 py-2 shadow-sm transition hover:-translate-y-px hover:border-emerald-200 hover:bg-emerald-50 dark:border-slate-800 dark:bg-slate-900 dark:hover:border-emerald-700 dark:hover:bg-emerald-950/40"
                onclick={toggle_theme}
                aria-label={label}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
