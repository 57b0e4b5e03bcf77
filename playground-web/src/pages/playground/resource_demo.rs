use super::action_button;
use crate::api::PlaceholderClient;
use crate::components::{CodeBlock, Loading, SectionCard};
use shared::models::{Todo, TodoPatch};
use shared::playground::resource::{self, draft_todo, TodoRow};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Todos requested by the manual loader.
const TODO_BATCH: u32 = 5;

const CODE: &str = r#"// Fetch on mount
let posts = use_async_with_options(client.get_posts(None), UseAsyncOptions::enable_auto());

// Fetch on demand
let todos = use_async(client.get_todos(Some(5)));
todos.run();

// Optimistic update, then reconcile with the server.
// Rows the host never stored stay local.
local.dispatch(TodoAction::Toggle(index));
if row.synced {
    spawn_local(async move {
        if client.update_todo(id, &TodoPatch::completed(done)).await.is_err() {
            todos.run();
        }
    });
}"#;

/// Local copy of the fetched todos, edited optimistically.
#[derive(Debug, Default, PartialEq)]
struct LocalTodos(Vec<TodoRow>);

enum TodoAction {
    Replace(Vec<Todo>),
    Toggle(usize),
    Append(Todo),
}

impl Reducible for LocalTodos {
    type Action = TodoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            TodoAction::Replace(todos) => next = resource::rows_from_fetch(todos),
            TodoAction::Toggle(index) => {
                resource::toggle_at(&mut next, index);
            }
            TodoAction::Append(todo) => {
                resource::append_created(&mut next, todo);
            }
        }
        Rc::new(Self(next))
    }
}

#[function_component(ResourceDemo)]
pub fn resource_demo() -> Html {
    let posts = use_async_with_options(
        async move { PlaceholderClient::shared().get_posts(None).await },
        UseAsyncOptions::enable_auto(),
    );

    // (post id, author id) of the highlighted post
    let selected = use_state(|| None::<(u32, u32)>);
    let author = {
        let selected = *selected;
        use_async(async move {
            match selected {
                Some((_, user_id)) => PlaceholderClient::shared().get_user(user_id).await.map(Some),
                None => Ok(None),
            }
        })
    };
    let comments = {
        let selected = *selected;
        use_async(async move {
            match selected {
                Some((post_id, _)) => PlaceholderClient::shared().get_comments(post_id).await,
                None => Ok(Vec::new()),
            }
        })
    };
    {
        let author = author.clone();
        let comments = comments.clone();
        use_effect_with(*selected, move |selected| {
            if selected.is_some() {
                author.run();
                comments.run();
            }
            || ()
        });
    }

    let todos = use_async(async move {
        PlaceholderClient::shared()
            .get_todos(Some(TODO_BATCH))
            .await
    });
    let local = use_reducer(LocalTodos::default);
    {
        let dispatcher = local.dispatcher();
        use_effect_with((todos.loading, todos.data.clone()), move |(loading, data)| {
            if let (false, Some(fetched)) = (loading, data) {
                dispatcher.dispatch(TodoAction::Replace(fetched.clone()));
            }
            || ()
        });
    }
    let todos_requested = todos.loading || todos.data.is_some() || todos.error.is_some();

    let refetch_posts = {
        let posts = posts.clone();
        Callback::from(move |_: MouseEvent| posts.run())
    };
    let load_todos = {
        let todos = todos.clone();
        Callback::from(move |_: MouseEvent| todos.run())
    };
    let toggle_todo = {
        let todos = todos.clone();
        let local = local.clone();
        Callback::from(move |index: usize| {
            let Some(row) = local.0.get(index) else {
                return;
            };
            let (id, completed, synced) = (row.todo.id, !row.todo.completed, row.synced);
            local.dispatch(TodoAction::Toggle(index));
            if !synced {
                return;
            }
            let todos = todos.clone();
            spawn_local(async move {
                let patch = TodoPatch::completed(completed);
                if let Err(err) = PlaceholderClient::shared().update_todo(id, &patch).await {
                    log::warn!("optimistic update of todo {id} rejected: {err}");
                    todos.run();
                }
            });
        })
    };
    let add_todo = {
        let local = local.clone();
        Callback::from(move |_: MouseEvent| {
            let draft = draft_todo(local.0.len());
            let dispatcher = local.dispatcher();
            spawn_local(async move {
                match PlaceholderClient::shared().create_todo(&draft).await {
                    Ok(created) => dispatcher.dispatch(TodoAction::Append(created)),
                    Err(err) => log::warn!("creating todo failed: {err}"),
                }
            });
        })
    };

    let posts_view = if posts.loading {
        html! { <Loading label="Loading posts" /> }
    } else if let Some(err) = &posts.error {
        html! { <p class="text-sm text-rose-500">{err.to_string()}</p> }
    } else {
        html! {
            <div class="space-y-2">
                { for posts.data.iter().flatten().map(|post| {
                    let is_selected = selected.map(|(id, _)| id) == Some(post.id);
                    let onclick = {
                        let selected = selected.clone();
                        let ids = (post.id, post.user_id);
                        Callback::from(move |_: MouseEvent| selected.set(Some(ids)))
                    };
                    html! {
                        <div
                            key={post.id}
                            class={classes!(
                                "cursor-pointer", "rounded-lg", "border", "px-3", "py-2", "text-sm", "transition",
                                if is_selected {
                                    "border-emerald-300 bg-emerald-50 dark:border-emerald-700 dark:bg-emerald-950/30"
                                } else {
                                    "border-slate-200 bg-white hover:border-slate-300 dark:border-slate-700 dark:bg-slate-800 dark:hover:border-slate-600"
                                }
                            )}
                            {onclick}
                        >
                            <p class="truncate font-medium text-slate-800 dark:text-slate-100">{post.title.clone()}</p>
                        </div>
                    }
                }) }
            </div>
        }
    };

    let details_view = if selected.is_none() {
        html! { <p class="text-xs text-slate-500">{"Select a post to load its author and comments."}</p> }
    } else if author.loading || comments.loading {
        html! { <Loading label="Loading details" /> }
    } else if let Some(err) = author.error.as_ref().or(comments.error.as_ref()) {
        html! { <p class="text-sm text-rose-500">{err.to_string()}</p> }
    } else {
        let author_name = author
            .data
            .clone()
            .flatten()
            .map_or_else(|| "Unknown author".to_string(), |user| format!("{} ({})", user.name, user.email));
        html! {
            <div class="space-y-2 rounded-lg border border-slate-200 bg-slate-50 p-3 text-sm dark:border-slate-700 dark:bg-slate-800">
                <p><span class="text-slate-500">{"Author: "}</span><span class="font-medium">{author_name}</span></p>
                <p class="text-slate-500">{format!("{} comments", comments.data.as_ref().map_or(0, Vec::len))}</p>
                <ul class="space-y-1">
                    { for comments.data.iter().flatten().map(|comment| html! {
                        <li key={comment.id} class="text-xs text-slate-600 dark:text-slate-300">
                            {resource::title_preview(&comment.name)}
                        </li>
                    }) }
                </ul>
            </div>
        }
    };

    let todos_view = if todos.loading {
        html! { <Loading label="Loading todos" /> }
    } else if let Some(err) = &todos.error {
        html! { <p class="text-sm text-rose-500">{err.to_string()}</p> }
    } else {
        html! {
            <>
                <div class="space-y-2">
                    { for local.0.iter().enumerate().map(|(index, row)| {
                        let todo = &row.todo;
                        let onclick = toggle_todo.reform(move |_: MouseEvent| index);
                        html! {
                            <div key={todo.id} class="flex items-center justify-between rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm dark:border-slate-700 dark:bg-slate-800">
                                <span class={if todo.completed { "text-slate-400 line-through" } else { "text-slate-700 dark:text-slate-200" }}>
                                    {resource::title_preview(&todo.title)}
                                </span>
                                <button
                                    type="button"
                                    class={classes!(
                                        "rounded", "px-2", "py-1", "text-xs", "font-medium",
                                        if todo.completed {
                                            "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/50 dark:text-emerald-300"
                                        } else {
                                            "bg-slate-200 text-slate-600 dark:bg-slate-700 dark:text-slate-300"
                                        }
                                    )}
                                    {onclick}
                                >
                                    {if todo.completed { "Done" } else { "Pending" }}
                                </button>
                            </div>
                        }
                    }) }
                </div>
                <p class="text-xs text-slate-500">
                    {"Status buttons update the list instantly; a failed save reloads it from the server. Added todos stay local."}
                </p>
            </>
        }
    };

    html! {
        <SectionCard
            title="7. Async resources: fetch, mutate and refetch"
            description="use_async handles async data with loading states, manual refetch and optimistic updates."
        >
            <div class="space-y-6">
                <div class="grid gap-4 sm:grid-cols-2">
                    <div class="space-y-3">
                        <div class="flex items-center justify-between">
                            <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Posts (fetched on mount)"}</p>
                            <button type="button" class={action_button("bg-blue-500")} onclick={refetch_posts}>
                                {"Refetch"}
                            </button>
                        </div>
                        {posts_view}
                    </div>
                    <div class="space-y-3">
                        <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Selected post"}</p>
                        {details_view}
                    </div>
                </div>

                <div class="space-y-3">
                    <div class="flex items-center justify-between">
                        <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Todos (manual trigger)"}</p>
                        <div class="flex gap-2">
                            if todos_requested {
                                <button type="button" class={action_button("bg-emerald-500")} onclick={add_todo} disabled={todos.loading}>
                                    {"Add todo"}
                                </button>
                                <button type="button" class={action_button("bg-blue-500")} onclick={load_todos}>
                                    {"Refetch"}
                                </button>
                            } else {
                                <button type="button" class={action_button("bg-emerald-500")} onclick={load_todos}>
                                    {"Load todos"}
                                </button>
                            }
                        </div>
                    </div>
                    if todos_requested {
                        {todos_view}
                    }
                </div>

                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
