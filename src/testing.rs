//! Test doubles shared by the unit tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::api::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::app::SignupApp;
use crate::config::ClientConfig;
use crate::dispatch::{Feedback, Timer};
use crate::roster::RosterView;
use crate::session::MemoryTokenStore;
use crate::surface::Surface;

/// Replies in the order they were scripted and records every request.
/// Running out of replies looks like a network failure.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, reason: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::Network(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceEvent {
    Auth(bool),
    Roster(RosterView),
    RosterFailure(String),
    Feedback(Option<Feedback>),
    ResetSignupForm,
    CloseLoginForm,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn last_auth(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SurfaceEvent::Auth(authenticated) => Some(*authenticated),
            _ => None,
        })
    }

    pub fn last_roster(&self) -> Option<RosterView> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SurfaceEvent::Roster(view) => Some(view.clone()),
            _ => None,
        })
    }

    /// The feedback currently visible
    pub fn feedback(&self) -> Option<Feedback> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                SurfaceEvent::Feedback(feedback) => Some(feedback.clone()),
                _ => None,
            })
            .flatten()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Surface for RecordingSurface {
    fn paint_auth(&self, authenticated: bool) {
        self.push(SurfaceEvent::Auth(authenticated));
    }

    fn paint_roster(&self, roster: &RosterView) {
        self.push(SurfaceEvent::Roster(roster.clone()));
    }

    fn paint_roster_failure(&self, message: &str) {
        self.push(SurfaceEvent::RosterFailure(message.to_string()));
    }

    fn paint_feedback(&self, feedback: Option<&Feedback>) {
        self.push(SurfaceEvent::Feedback(feedback.cloned()));
    }

    fn reset_signup_form(&self) {
        self.push(SurfaceEvent::ResetSignupForm);
    }

    fn close_login_form(&self) {
        self.push(SurfaceEvent::CloseLoginForm);
    }
}

/// Timer whose callbacks run only when the test says so
#[derive(Default)]
pub(crate) struct ManualTimer {
    tasks: RefCell<VecDeque<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualTimer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pending_delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn fire_next(&self) {
        let task = self.tasks.borrow_mut().pop_front();
        if let Some((_, task)) = task {
            task();
        }
    }

    pub fn fire_all(&self) {
        while !self.tasks.borrow().is_empty() {
            self.fire_next();
        }
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push_back((delay, task));
    }
}

/// A fully wired app over test doubles
pub(crate) struct Harness {
    pub transport: Rc<ScriptedTransport>,
    pub store: MemoryTokenStore,
    pub surface: Rc<RecordingSurface>,
    pub timer: Rc<ManualTimer>,
    pub app: SignupApp,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(MemoryTokenStore::new())
    }

    pub fn with_store(store: MemoryTokenStore) -> Self {
        let transport = ScriptedTransport::new();
        let surface = RecordingSurface::new();
        let timer = ManualTimer::new();
        let app = SignupApp::new(
            &ClientConfig::default(),
            transport.clone(),
            Box::new(store.clone()),
            surface.clone(),
            timer.clone(),
        );

        Self {
            transport,
            store,
            surface,
            timer,
            app,
        }
    }
}
