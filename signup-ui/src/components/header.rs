//! Header Component
//!
//! Title bar with the teacher login / logout controls.

use activity_signup::SignupApp;
use leptos::*;
use std::rc::Rc;

use crate::state::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");
    let app = use_context::<Rc<SignupApp>>().expect("SignupApp not found");

    let on_logout = move |_: web_sys::MouseEvent| {
        let app = app.clone();
        spawn_local(async move {
            app.dispatcher.logout().await;
        });
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 flex items-center justify-between h-16">
                <div>
                    <h1 class="text-xl font-bold">"Mergington High School"</h1>
                    <h2 class="text-sm text-gray-400">"Extracurricular Activities"</h2>
                </div>

                <div class="flex items-center space-x-3">
                    <span
                        id="user-icon"
                        class="text-2xl"
                        class:authenticated=move || state.authenticated.get()
                    >
                        "👤"
                    </span>

                    <button
                        id="login-btn"
                        class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 transition-colors"
                        class:hidden=move || state.authenticated.get()
                        on:click=move |_| state.login_open.set(true)
                    >
                        "Login"
                    </button>

                    <button
                        id="logout-btn"
                        class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                        class:hidden=move || !state.authenticated.get()
                        on:click=on_logout
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
