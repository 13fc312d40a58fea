//! Task Item Component
//!
//! A single task row: completion toggle, expandable description and
//! edit/delete controls, or the in-place edit form when this task is
//! the one being edited.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::deadline::deadline_status;
use crate::models::{Task, TaskDraft};
use crate::store;

#[component]
pub fn TaskItem(
    task: Task,
    set_tasks: WriteSignal<Vec<Task>>,
    editing_task_id: ReadSignal<Option<String>>,
    set_editing_task_id: WriteSignal<Option<String>>,
    edited_draft: ReadSignal<TaskDraft>,
    set_edited_draft: WriteSignal<TaskDraft>,
    expanded_task_id: ReadSignal<Option<String>>,
    set_expanded_task_id: WriteSignal<Option<String>>,
    pending_ids: ReadSignal<Vec<String>>,
    set_pending_ids: WriteSignal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Proximity is computed at render time; the row re-renders whenever
    // any task field changes since they are all part of the <For> key.
    let proximity = deadline_status(&task.deadline, js_sys::Date::now());

    let completed = task.completed;
    let title = task.title.clone();
    let deadline_text = task.deadline.clone();
    // Rendered two closure levels deep (display branch, then the
    // expanded Show), so store it as a Copy handle
    let description = StoredValue::new(task.description.clone());

    let is_editing = {
        let id = task.id.clone();
        move || editing_task_id.get().as_deref() == Some(id.as_str())
    };
    let is_expanded = {
        let id = task.id.clone();
        move || expanded_task_id.get().as_deref() == Some(id.as_str())
    };
    let is_pending = {
        let id = task.id.clone();
        move || pending_ids.get().iter().any(|p| *p == id)
    };

    // Mutations claim the task id first; a second action on the same
    // task while one is in flight is rejected, so two updates for one
    // id can never overlap. State changes only on the server's echo.
    let toggle_completed = {
        let task = task.clone();
        move |_| {
            let mut merged = task.clone();
            merged.completed = !merged.completed;
            let mut claimed = false;
            set_pending_ids.update(|p| claimed = store::begin_mutation(p, &merged.id));
            if !claimed {
                return;
            }
            spawn_local(async move {
                let id = merged.id.clone();
                match api::update_task(&id, &merged).await {
                    Ok(updated) => set_tasks.update(|tasks| store::replace_task(tasks, updated)),
                    Err(err) => ctx.notify(format!("Could not update task: {}", err)),
                }
                set_pending_ids.update(|p| store::end_mutation(p, &id));
            });
        }
    };

    let delete_task = {
        let id = task.id.clone();
        move |_| {
            let id = id.clone();
            let mut claimed = false;
            set_pending_ids.update(|p| claimed = store::begin_mutation(p, &id));
            if !claimed {
                return;
            }
            spawn_local(async move {
                match api::delete_task(&id).await {
                    Ok(()) => set_tasks.update(|tasks| store::remove_task(tasks, &id)),
                    Err(err) => ctx.notify(format!("Could not delete task: {}", err)),
                }
                set_pending_ids.update(|p| store::end_mutation(p, &id));
            });
        }
    };

    // Begin-edit always overwrites all three draft fields, so nothing
    // from an abandoned edit session can leak into this one.
    let begin_edit = {
        let task = task.clone();
        move |_| {
            set_edited_draft.set(TaskDraft {
                title: task.title.clone(),
                description: task.description.clone(),
                deadline: task.deadline.clone(),
            });
            set_editing_task_id.set(Some(task.id.clone()));
        }
    };

    // Sends only the three draft fields; the service preserves id and
    // completed and echoes the full task back.
    let save_edit = {
        let id = task.id.clone();
        move |_| {
            let id = id.clone();
            let draft = edited_draft.get();
            let mut claimed = false;
            set_pending_ids.update(|p| claimed = store::begin_mutation(p, &id));
            if !claimed {
                return;
            }
            spawn_local(async move {
                match api::update_task(&id, &draft).await {
                    Ok(updated) => {
                        set_tasks.update(|tasks| store::replace_task(tasks, updated));
                        set_editing_task_id.set(None);
                    }
                    Err(err) => ctx.notify(format!("Could not save task: {}", err)),
                }
                set_pending_ids.update(|p| store::end_mutation(p, &id));
            });
        }
    };

    let cancel_edit = move |_| set_editing_task_id.set(None);

    // Each disabled binding gets its own clone of the pending check
    // since the two Show branches take ownership of what they capture
    let pending_save = is_pending.clone();
    let pending_toggle = is_pending.clone();
    let pending_begin = is_pending.clone();
    let pending_delete = is_pending;

    let edit_shown = {
        let editing = is_editing.clone();
        move || editing()
    };
    let display_shown = {
        let editing = is_editing.clone();
        move || !editing()
    };
    let description_shown = {
        let expanded = is_expanded.clone();
        move || expanded()
    };

    // Expanding one task collapses whichever other task was expanded
    let toggle_expanded = {
        let id = task.id.clone();
        move |_| {
            set_expanded_task_id.update(|current| store::toggle_expanded(current, &id));
        }
    };

    let deadline_class = match proximity {
        Some(status) => format!("deadline {}", status.css_class()),
        None => "deadline".to_string(),
    };

    view! {
        <li class="task-item">
            <Show when=edit_shown>
                <div class="task-edit-form">
                    <input
                        type="text"
                        placeholder="Edit title"
                        prop:value=move || edited_draft.get().title
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_edited_draft.update(|d| d.title = value);
                        }
                    />
                    <input
                        type="text"
                        placeholder="Edit description"
                        prop:value=move || edited_draft.get().description
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_edited_draft.update(|d| d.description = value);
                        }
                    />
                    <input
                        type="date"
                        prop:value=move || edited_draft.get().deadline
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_edited_draft.update(|d| d.deadline = value);
                        }
                    />
                    <button on:click=save_edit.clone() disabled=pending_save.clone()>"Save"</button>
                    <button on:click=cancel_edit>"Cancel"</button>
                </div>
            </Show>

            <Show when=display_shown>
                <div class="task-header">
                    <input
                        type="checkbox"
                        checked=completed
                        disabled=pending_toggle.clone()
                        on:change=toggle_completed.clone()
                    />
                    <span
                        class=move || if completed { "task-title completed" } else { "task-title" }
                        on:click=toggle_expanded.clone()
                    >
                        {title.clone()}
                    </span>
                </div>
                <Show when=description_shown.clone()>
                    <div class="task-description">
                        <p>{move || description.get_value()}</p>
                    </div>
                </Show>
                <div class="task-controls">
                    <button on:click=begin_edit.clone() disabled=pending_begin.clone()>"Edit"</button>
                    <button on:click=delete_task.clone() disabled=pending_delete.clone()>"Delete"</button>
                </div>
            </Show>

            <span class=deadline_class>
                {deadline_text}
            </span>
            {proximity.map(|status| view! {
                <span class=format!("deadline-label {}", status.css_class())>
                    {status.label()}
                </span>
            })}
        </li>
    }
}
