//! Task List View
//!
//! Owns all task state: the server-cached collection, the drafts, the
//! sort/filter/search selections and the single expanded/editing ids.
//! The rendered list is derived from the full collection on every
//! render; the collection itself changes only on confirmed server
//! responses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterBar, NewTaskForm, TaskItem};
use crate::context::AppContext;
use crate::filters;
use crate::models::{FilterCriteria, SortCriteria, Task, TaskDraft};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (editing_task_id, set_editing_task_id) = signal::<Option<String>>(None);
    let (edited_draft, set_edited_draft) = signal(TaskDraft::default());
    let (sort_criteria, set_sort_criteria) = signal(SortCriteria::default());
    let (filter_criteria, set_filter_criteria) = signal(FilterCriteria::default());
    let (search_query, set_search_query) = signal(String::new());
    let (expanded_task_id, set_expanded_task_id) = signal::<Option<String>>(None);
    let (pending_ids, set_pending_ids) = signal(Vec::<String>::new());

    // Load the collection wholesale on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[TaskList] Loaded {} tasks", loaded.len()).into(),
                    );
                    set_tasks.set(loaded);
                }
                Err(err) => ctx.notify(format!("Could not load tasks: {}", err)),
            }
        });
    });

    let visible_tasks = move || {
        filters::visible_tasks(
            &tasks.get(),
            filter_criteria.get(),
            &search_query.get(),
            sort_criteria.get(),
        )
    };

    view! {
        <div class="task-list-container">
            <h2>"To-Do List"</h2>

            <NewTaskForm set_tasks=set_tasks />

            <FilterBar
                search_query=search_query
                set_search_query=set_search_query
                filter_criteria=filter_criteria
                set_filter_criteria=set_filter_criteria
                sort_criteria=sort_criteria
                set_sort_criteria=set_sort_criteria
            />

            <ul class="task-list">
                <For
                    each=visible_tasks
                    key=|task| {
                        // Key on every mutable field so a server echo
                        // re-renders the row
                        (
                            task.id.clone(),
                            task.title.clone(),
                            task.description.clone(),
                            task.deadline.clone(),
                            task.completed,
                        )
                    }
                    children=move |task| {
                        view! {
                            <TaskItem
                                task=task
                                set_tasks=set_tasks
                                editing_task_id=editing_task_id
                                set_editing_task_id=set_editing_task_id
                                edited_draft=edited_draft
                                set_edited_draft=set_edited_draft
                                expanded_task_id=expanded_task_id
                                set_expanded_task_id=set_expanded_task_id
                                pending_ids=pending_ids
                                set_pending_ids=set_pending_ids
                            />
                        }
                    }
                />
            </ul>

            <p class="task-count">
                {move || format!("{} of {} tasks shown", visible_tasks().len(), tasks.get().len())}
            </p>
        </div>
    }
}
