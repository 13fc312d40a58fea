//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a surfaced error stays on screen
const NOTICE_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transient error notice shown in the banner - read
    pub notice: ReadSignal<Option<String>>,
    /// Transient error notice shown in the banner - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Surface a failed action without blocking the view. The notice
    /// clears itself after a few seconds.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&format!("[TaskList] {}", message).into());
        self.set_notice.set(Some(message));
        let set_notice = self.set_notice;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
            set_notice.set(None);
        });
    }

    /// Dismiss the notice immediately
    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}
