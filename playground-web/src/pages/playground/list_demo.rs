use super::action_button;
use crate::components::{CodeBlock, SectionCard};
use shared::playground::lists;
use std::collections::HashMap;
use yew::prelude::*;

const CODE: &str = r#"// Keyed: nodes follow their values when the list is reordered
{ for fruits.iter().map(|fruit| html! { <div key={fruit.clone()}>{fruit}</div> }) }

// Positional: nodes stay put, only their text is patched
{ for numbers.iter().enumerate().map(|(i, value)| html! { <div>{format!("[{i}] {value}")}</div> }) }"#;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn random_index(bound: usize) -> usize {
    (js_sys::Math::random() * bound as f64).floor() as usize
}

/// Keys stay unique when the same label appears twice.
fn fruit_keys(fruits: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    fruits
        .iter()
        .map(|fruit| {
            let occurrence = seen.entry(fruit.as_str()).or_default();
            *occurrence += 1;
            format!("{fruit}#{occurrence}")
        })
        .collect()
}

#[function_component(ListRenderingDemo)]
pub fn list_rendering_demo() -> Html {
    let fruits = use_state(lists::starter_fruits);
    let numbers = use_state(|| lists::STARTER_NUMBERS.to_vec());

    let update_fruits = |change: fn(&mut Vec<String>)| {
        let fruits = fruits.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*fruits).clone();
            change(&mut next);
            fruits.set(next);
        })
    };
    let update_numbers = |change: fn(&mut Vec<i64>)| {
        let numbers = numbers.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*numbers).clone();
            change(&mut next);
            numbers.set(next);
        })
    };

    let keys = fruit_keys(&fruits);

    html! {
        <SectionCard
            title="4. List rendering: keyed vs positional"
            description="Keyed children are tracked by identity (good for reordering), unkeyed children by position (good for value updates)."
        >
            <div class="grid gap-6 sm:grid-cols-2">
                <div class="space-y-3">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Keyed, identity-based"}</p>
                    <div class="space-y-2">
                        { for fruits.iter().zip(keys).enumerate().map(|(index, (fruit, key))| {
                            let fruits = fruits.clone();
                            let remove = Callback::from(move |_: MouseEvent| {
                                let mut next = (*fruits).clone();
                                lists::remove_at(&mut next, index);
                                fruits.set(next);
                            });
                            html! {
                                <div key={key} class="flex items-center justify-between rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm dark:border-slate-700 dark:bg-slate-800">
                                    <span>
                                        <span class="text-slate-400">{format!("[{index}] ")}</span>{fruit.clone()}
                                    </span>
                                    <button type="button" class="text-rose-500 hover:text-rose-400" onclick={remove}>{"✕"}</button>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="flex gap-2">
                        <button type="button" class={action_button("bg-emerald-500")} onclick={update_fruits(lists::append_fruit)}>
                            {"Add"}
                        </button>
                        <button
                            type="button"
                            class={action_button("bg-blue-500")}
                            onclick={update_fruits(|fruits| lists::shuffle(fruits, random_index))}
                        >
                            {"Shuffle"}
                        </button>
                    </div>
                    <p class="text-xs text-slate-500">{"DOM nodes move with their items when shuffled (check DevTools)."}</p>
                </div>

                <div class="space-y-3">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Unkeyed, position-based"}</p>
                    <div class="space-y-2">
                        { for numbers.iter().enumerate().map(|(index, value)| {
                            let numbers = numbers.clone();
                            let bump = Callback::from(move |_: MouseEvent| {
                                let mut next = (*numbers).clone();
                                lists::bump_at(&mut next, index, 10);
                                numbers.set(next);
                            });
                            html! {
                                <div class="flex items-center justify-between rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm dark:border-slate-700 dark:bg-slate-800">
                                    <span>
                                        <span class="text-slate-400">{format!("[{index}] ")}</span>{*value}
                                    </span>
                                    <button
                                        type="button"
                                        class="rounded bg-slate-200 px-2 py-0.5 text-xs hover:bg-slate-300 dark:bg-slate-700 dark:hover:bg-slate-600"
                                        onclick={bump}
                                    >
                                        {"+10"}
                                    </button>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="flex gap-2">
                        <button type="button" class={action_button("bg-emerald-500")} onclick={update_numbers(lists::append_hundred)}>
                            {"Add"}
                        </button>
                        <button
                            type="button"
                            class={action_button("bg-amber-500")}
                            onclick={update_numbers(|numbers| lists::double_all(numbers))}
                        >
                            {"Double all"}
                        </button>
                    </div>
                    <p class="text-xs text-slate-500">{"DOM nodes stay fixed; only text content updates."}</p>
                </div>
            </div>
            <CodeBlock code={CODE} />
        </SectionCard>
    }
}

#[cfg(test)]
mod tests {
    use super::fruit_keys;

    #[test]
    fn test_fruit_keys_are_unique_for_repeated_labels() {
        let fruits = vec![
            "Fruit 4".to_string(),
            "Apple".to_string(),
            "Fruit 4".to_string(),
        ];
        assert_eq!(fruit_keys(&fruits), vec!["Fruit 4#1", "Apple#1", "Fruit 4#2"]);
    }
}
