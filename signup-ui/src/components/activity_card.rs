//! Activity Card Components
//!
//! The roster list and one card per activity.

use activity_signup::{ActivityCard as Card, RemoveControl, SignupApp};
use leptos::*;
use std::rc::Rc;

use crate::components::Loading;
use crate::state::{RosterPane, UiState};

/// Whole roster, rebuilt from scratch on every paint
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    view! {
        <div id="activities-list" class="grid gap-4 md:grid-cols-2">
            {move || match state.roster.get() {
                RosterPane::Loading => view! { <Loading /> }.into_view(),
                RosterPane::Failed(message) => view! {
                    <p class="text-red-400">{message}</p>
                }.into_view(),
                RosterPane::Ready(roster) => roster
                    .cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
pub fn ActivityCard(card: Card) -> impl IntoView {
    let participants = if card.participants.is_empty() {
        view! { <p class="text-gray-500 italic">"No participants yet"</p> }.into_view()
    } else {
        view! {
            <ul class="participants-list space-y-1">
                {card.participants.into_iter().map(|row| view! {
                    <li class="flex items-center justify-between">
                        <span class="participant-email">{row.email}</span>
                        {row.remove.map(|control| view! { <RemoveButton control=control /> })}
                    </li>
                }).collect_view()}
            </ul>
        }.into_view()
    };

    view! {
        <div class="activity-card bg-gray-800 rounded-lg p-4">
            <h4 class="text-lg font-semibold mb-1">{card.name}</h4>
            <p class="text-gray-300 mb-2">{card.description}</p>
            <p class="text-sm"><strong>"Schedule: "</strong>{card.schedule}</p>
            <p class="text-sm mb-3">
                <strong>"Availability: "</strong>
                {format!("{} spots left", card.spots_left)}
            </p>
            <div class="participants-container">
                <h5 class="text-sm font-semibold text-gray-400 mb-1">"Participants:"</h5>
                {participants}
            </div>
        </div>
    }
}

/// Unregister button carrying its activity and email
#[component]
fn RemoveButton(control: RemoveControl) -> impl IntoView {
    let app = use_context::<Rc<SignupApp>>().expect("SignupApp not found");

    let on_click = move |_: web_sys::MouseEvent| {
        let app = app.clone();
        let RemoveControl { activity, email } = control.clone();
        spawn_local(async move {
            app.dispatcher.unregister(&activity, &email).await;
        });
    };

    view! {
        <button
            class="delete-btn text-red-400 hover:text-red-300"
            title="Unregister"
            on:click=on_click
        >
            "❌"
        </button>
    }
}
