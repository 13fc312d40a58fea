//! New Task Form Component
//!
//! Form for creating new tasks: title, description, deadline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::{Task, TaskDraft};

/// Form for creating new tasks. The draft is local; nothing is sent
/// until submit, and the draft is kept if the server rejects it.
#[component]
pub fn NewTaskForm(set_tasks: WriteSignal<Vec<Task>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(TaskDraft::default());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted = draft.get();

        spawn_local(async move {
            match api::create_task(&submitted).await {
                Ok(created) => {
                    web_sys::console::log_1(
                        &format!("[NewTaskForm] Created task {}", created.id).into(),
                    );
                    set_tasks.update(|tasks| tasks.push(created));
                    set_draft.set(TaskDraft::default());
                }
                Err(err) => ctx.notify(format!("Could not add task: {}", err)),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || draft.get().title
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    set_draft.update(|d| d.title = value);
                }
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    set_draft.update(|d| d.description = value);
                }
            />
            <input
                type="date"
                prop:value=move || draft.get().deadline
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    set_draft.update(|d| d.deadline = value);
                }
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
