use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: Route,
    pub current_route: Option<Route>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        classes!("bg-emerald-100", "text-emerald-700", "dark:bg-emerald-900/50", "dark:text-emerald-300")
    } else {
        classes!("text-slate-600", "dark:text-slate-400")
    };

    html! {
        <Link<Route>
            to={props.route.clone()}
            classes={classes!(
                "rounded-lg",
                "px-3",
                "py-2",
                "text-sm",
                "font-medium",
                "transition",
                "hover:bg-slate-100",
                "dark:hover:bg-slate-800",
                active_route_class
            )}
        >
            {props.route.title()}
        </Link<Route>>
    }
}
