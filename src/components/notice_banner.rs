//! Notice Banner Component
//!
//! Non-blocking banner for surfaced action failures.

use leptos::prelude::*;

use crate::context::AppContext;

/// Shows the current notice from context, if any. Click to dismiss;
/// it also clears itself after a few seconds.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice-banner" on:click=move |_| ctx.dismiss()>
                {message}
            </div>
        })}
    }
}
