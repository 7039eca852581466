//! Loading indicator shown while session validity is undetermined.

use leptos::prelude::*;

/// Full-screen spinner rendered by the entry gate during the initial
/// session resolution. Deliberately contains no navigable content.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">"Checking session..."</p>
        </div>
    }
}
