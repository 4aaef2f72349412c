//! Feedback Message Component
//!
//! Shows the single success or error line. The core hides it when its
//! window elapses.

use activity_signup::FeedbackKind;
use leptos::*;

use crate::state::UiState;

#[component]
pub fn Message() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    view! {
        {move || {
            state.feedback.get().map(|feedback| {
                let (icon, bg_class) = match feedback.kind {
                    FeedbackKind::Success => ("✓", "bg-green-600"),
                    FeedbackKind::Error => ("✕", "bg-red-600"),
                };

                view! {
                    <div
                        id="message"
                        class=format!(
                            "{} mt-4 flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg",
                            feedback.kind.as_class(),
                            bg_class
                        )
                    >
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium">{feedback.text}</span>
                    </div>
                }
            })
        }}
    }
}
