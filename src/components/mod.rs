//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod new_task_form;
mod notice_banner;
mod task_item;
mod task_list;

pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use notice_banner::NoticeBanner;
pub use task_item::TaskItem;
pub use task_list::TaskList;
