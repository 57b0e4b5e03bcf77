use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="rounded-2xl border border-slate-200 bg-white/70 p-5 shadow-sm dark:border-slate-800 dark:bg-slate-900/70">
            <p class="text-xs uppercase tracking-[0.2em] text-slate-500">{ props.title.clone() }</p>
            <p class="mt-2 text-3xl font-semibold text-slate-900 dark:text-slate-50">{ props.value.clone() }</p>
            if let Some(helper) = props.helper.clone() {
                <p class="mt-1 text-xs text-slate-500">{ helper }</p>
            }
        </div>
    }
}
