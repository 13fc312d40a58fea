//! Filter Bar Component
//!
//! Search, status filter and sort selectors. Pure state assignments;
//! the list derives itself from these on every render.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{FilterCriteria, SortCriteria};

#[component]
pub fn FilterBar(
    search_query: ReadSignal<String>,
    set_search_query: WriteSignal<String>,
    filter_criteria: ReadSignal<FilterCriteria>,
    set_filter_criteria: WriteSignal<FilterCriteria>,
    sort_criteria: ReadSignal<SortCriteria>,
    set_sort_criteria: WriteSignal<SortCriteria>,
) -> impl IntoView {
    view! {
        <div class="search-container">
            <label for="search-query">"Search: "</label>
            <input
                type="text"
                id="search-query"
                placeholder="Search tasks"
                prop:value=move || search_query.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_search_query.set(input.value());
                }
            />
        </div>

        <div class="filter-container">
            <label for="filter-criteria">"Filter by status: "</label>
            <select
                id="filter-criteria"
                prop:value=move || filter_criteria.get().as_str()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_filter_criteria.set(FilterCriteria::parse(&select.value()));
                }
            >
                <option value="all">"All"</option>
                <option value="completed">"Completed"</option>
                <option value="pending">"Pending"</option>
            </select>
        </div>

        <div class="sort-container">
            <label for="sort-criteria">"Sort by: "</label>
            <select
                id="sort-criteria"
                prop:value=move || sort_criteria.get().as_str()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_sort_criteria.set(SortCriteria::parse(&select.value()));
                }
            >
                <option value="deadline">"Deadline"</option>
                <option value="alphabetical">"Alphabetical"</option>
                <option value="status">"Status"</option>
            </select>
        </div>
    }
}
