use crate::{
    components::{
        header_nav_item::HeaderNavItem, theme_switcher::ThemeSwitcher,
        user_dropdown::UserDropdown,
    },
    routes::Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_routes = Route::nav_routes();

    html! {
        <header class="border-b border-slate-200 bg-white/80 backdrop-blur dark:border-slate-800 dark:bg-slate-900/70">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <div class="flex items-center gap-6">
                    <Link<Route> to={Route::Home} classes="block">
                        <p class="text-xs uppercase tracking-[0.2em] text-emerald-500">{"Reactive Playground"}</p>
                        <p class="text-lg font-semibold">{"Dashboard"}</p>
                    </Link<Route>>
                    <nav class="hidden items-center gap-1 sm:flex">
                        { for nav_routes.into_iter().map(|route| html! {
                            <HeaderNavItem
                                route={route}
                                current_route={props.current_route.clone()}
                            />
                        }) }
                    </nav>
                </div>
                <div class="flex items-center gap-3 text-sm">
                    <UserDropdown />
                    <ThemeSwitcher />
                </div>
            </div>
        </header>
    }
}
