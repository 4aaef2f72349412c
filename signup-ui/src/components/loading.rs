//! Loading Component

use leptos::*;

/// Placeholder shown until the first roster arrives
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-3 py-12 text-gray-400">
            <div class="loading-spinner w-6 h-6" />
            <p>"Loading activities..."</p>
        </div>
    }
}
