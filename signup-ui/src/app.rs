//! App Root Component
//!
//! Wires the signup core to the page and lays out the single screen.

use activity_signup::{ClientConfig, SignupApp};
use leptos::*;
use std::rc::Rc;

use crate::api::{self, GlooTransport, LocalStorageTokenStore};
use crate::components::{ActivityList, Header, LoginModal, Message, SignupForm};
use crate::state::{GlooTimer, UiState};

/// Build the core over browser adapters and provide it with the page state
fn provide_signup_app() -> (UiState, Rc<SignupApp>) {
    let state = UiState::new();

    let mut config = ClientConfig::default();
    config.api.base_url = api::get_api_base();

    let app = Rc::new(SignupApp::new(
        &config,
        Rc::new(GlooTransport),
        Box::new(LocalStorageTokenStore::new(&config.session.token_key)),
        Rc::new(state),
        Rc::new(GlooTimer),
    ));

    provide_context(state);
    provide_context(app.clone());
    (state, app)
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (state, app) = provide_signup_app();

    spawn_local(async move {
        app.start().await;
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8 grid gap-8 lg:grid-cols-3">
                <section id="activities-container" class="lg:col-span-2">
                    <h3 class="text-xl font-semibold mb-4">"Available Activities"</h3>
                    <ActivityList />
                </section>

                <section id="signup-container">
                    <h3 class="text-xl font-semibold mb-4">"Sign Up a Student"</h3>
                    <SignupForm />
                    <Message />
                </section>
            </main>

            {move || state.login_open.get().then(|| view! { <LoginModal /> })}

            <footer class="text-center text-gray-500 text-sm py-4">
                "© 2023 Mergington High School"
            </footer>
        </div>
    }
}
