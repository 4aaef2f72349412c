//! Signup Form Component
//!
//! Registers a student for the selected activity.

use activity_signup::SignupApp;
use leptos::*;
use std::rc::Rc;

use crate::state::UiState;

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");
    let app = use_context::<Rc<SignupApp>>().expect("SignupApp not found");
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = state.signup_email.get_untracked();
        let activity = state.signup_activity.get_untracked();
        let app = app.clone();

        set_submitting.set(true);
        spawn_local(async move {
            app.dispatcher.signup(&activity, &email).await;
            set_submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit class="space-y-4">
            <div>
                <label for="email" class="block text-sm text-gray-400 mb-2">"Student Email"</label>
                <input
                    id="email"
                    type="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.signup_email.get()
                    on:input=move |ev| state.signup_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label for="activity" class="block text-sm text-gray-400 mb-2">"Activity"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| state.signup_activity.set(event_target_value(&ev))
                    prop:value=move || state.signup_activity.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        state.activity_options.get()
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
            >
                "Sign Up"
            </button>
        </form>
    }
}
