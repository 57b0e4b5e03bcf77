use yew::{AttrValue, Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SectionCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub children: Children,
}

/// Titled panel wrapping one playground demo.
#[function_component(SectionCard)]
pub fn section_card(props: &SectionCardProps) -> Html {
    html! {
        <section class="space-y-4 rounded-2xl border border-slate-200 bg-white/70 p-6 shadow-sm dark:border-slate-800 dark:bg-slate-900/70">
            <div class="space-y-1">
                <h2 class="text-lg font-semibold text-slate-900 dark:text-slate-50">{ props.title.clone() }</h2>
                if let Some(description) = props.description.clone() {
                    <p class="text-sm text-slate-600 dark:text-slate-400">{ description }</p>
                }
            </div>
            { props.children.clone() }
        </section>
    }
}
