//! To-Do Manager App
//!
//! Top-level shell: heading, error banner, task list.

use leptos::prelude::*;

use crate::components::{NoticeBanner, TaskList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(AppContext::new((notice, set_notice)));

    view! {
        <div class="app">
            <h1>"To-Do Manager"</h1>
            <NoticeBanner />
            <TaskList />
        </div>
    }
}
