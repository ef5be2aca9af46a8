//! Centered loading placeholder.

use leptos::prelude::*;

/// Full-page spinner shown while a guard is still deciding.
#[component]
pub fn PageSpinner() -> impl IntoView {
    view! {
        <div class="page-spinner" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
