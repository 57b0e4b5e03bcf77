use shared::playground::alerts::AlertKind;
use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: AttrValue,
}

fn alert_box(kind: AlertKind, classes: &'static str, message: &AttrValue) -> Html {
    html! {
        <div class={classes}>
            { kind.icon() }{" "}{ message.clone() }
        </div>
    }
}

#[function_component(AlertSuccess)]
pub fn alert_success(props: &AlertProps) -> Html {
    alert_box(
        AlertKind::Success,
        "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-800 dark:bg-emerald-950/50 dark:text-emerald-300",
        &props.message,
    )
}

#[function_component(AlertWarning)]
pub fn alert_warning(props: &AlertProps) -> Html {
    alert_box(
        AlertKind::Warning,
        "rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm text-amber-700 dark:border-amber-800 dark:bg-amber-950/50 dark:text-amber-300",
        &props.message,
    )
}

#[function_component(AlertError)]
pub fn alert_error(props: &AlertProps) -> Html {
    alert_box(
        AlertKind::Error,
        "rounded-lg border border-rose-200 bg-rose-50 px-4 py-3 text-sm text-rose-700 dark:border-rose-800 dark:bg-rose-950/50 dark:text-rose-300",
        &props.message,
    )
}

#[function_component(AlertInfo)]
pub fn alert_info(props: &AlertProps) -> Html {
    alert_box(
        AlertKind::Info,
        "rounded-lg border border-sky-200 bg-sky-50 px-4 py-3 text-sm text-sky-700 dark:border-sky-800 dark:bg-sky-950/50 dark:text-sky-300",
        &props.message,
    )
}

#[derive(Properties, PartialEq)]
pub struct DynamicAlertProps {
    pub kind: AlertKind,
}

/// Mounts the alert component registered for `kind`.
#[function_component(DynamicAlert)]
pub fn dynamic_alert(props: &DynamicAlertProps) -> Html {
    let message = AttrValue::from(props.kind.message());
    match props.kind {
        AlertKind::Success => html! { <AlertSuccess {message} /> },
        AlertKind::Warning => html! { <AlertWarning {message} /> },
        AlertKind::Error => html! { <AlertError {message} /> },
        AlertKind::Info => html! { <AlertInfo {message} /> },
    }
}
