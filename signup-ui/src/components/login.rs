//! Login Modal Component

use activity_signup::SignupApp;
use leptos::*;
use std::rc::Rc;

use crate::state::UiState;

/// Teacher login form. Success closes it through the core's surface.
#[component]
pub fn LoginModal() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");
    let app = use_context::<Rc<SignupApp>>().expect("SignupApp not found");
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username = state.login_username.get_untracked();
        let password = state.login_password.get_untracked();
        let app = app.clone();

        set_submitting.set(true);
        spawn_local(async move {
            app.dispatcher.login(&username, &password).await;
            set_submitting.set(false);
        });
    };

    view! {
        <div id="login-modal" class="fixed inset-0 z-40 bg-gray-900/70 flex items-center justify-center">
            <div class="bg-gray-800 rounded-lg p-6 w-full max-w-sm shadow-lg">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold">"Teacher Login"</h3>
                    <button
                        type="button"
                        class="text-gray-400 hover:text-white"
                        on:click=move |_| state.login_open.set(false)
                    >
                        "✕"
                    </button>
                </div>

                <form id="login-form" on:submit=on_submit class="space-y-4">
                    <input
                        id="username"
                        type="text"
                        required
                        placeholder="Username"
                        prop:value=move || state.login_username.get()
                        on:input=move |ev| state.login_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        id="password"
                        type="password"
                        required
                        placeholder="Password"
                        prop:value=move || state.login_password.get()
                        on:input=move |ev| state.login_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
