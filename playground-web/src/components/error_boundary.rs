use yew::prelude::*;

/// What the fallback gets to render: the caught message and a way back.
#[derive(Clone, PartialEq)]
pub struct BoundaryFallback {
    pub message: String,
    pub reset: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    /// Renders the guarded subtree; `Err` is caught and shown via `fallback`.
    pub render: Callback<(), Result<Html, String>>,
    pub fallback: Callback<BoundaryFallback, Html>,
    #[prop_or_default]
    pub on_reset: Callback<()>,
}

/// Catches render failures of its subtree.
///
/// Once a failure is seen the fallback stays up until `reset` is emitted,
/// even if the subtree would render cleanly again in the meantime.
#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let caught = use_state(|| None::<String>);
    let outcome = props.render.emit(());
    let failure = outcome.as_ref().err().cloned();

    {
        let caught = caught.clone();
        use_effect_with(failure.clone(), move |failure| {
            if let Some(message) = failure {
                log::warn!("error boundary caught: {message}");
                caught.set(Some(message.clone()));
            }
            || ()
        });
    }

    let reset = {
        let caught = caught.clone();
        let on_reset = props.on_reset.clone();
        Callback::from(move |()| {
            caught.set(None);
            on_reset.emit(());
        })
    };

    match (*caught).clone().or(failure) {
        Some(message) => props.fallback.emit(BoundaryFallback { message, reset }),
        None => outcome.unwrap_or_default(),
    }
}
