//! Feedback messages
//!
//! One message at a time. Each message carries a generation; a hide timer
//! only hides the message it was scheduled for, so a newer message is never
//! cut short by an older timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// CSS class used by the browser surface
    pub fn as_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// Schedules a one-shot callback on the front end's event loop
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// The single visible feedback slot
pub struct FeedbackBoard {
    current: RefCell<Option<(u64, Feedback)>>,
    generation: Cell<u64>,
    surface: Rc<dyn Surface>,
    timer: Rc<dyn Timer>,
}

impl FeedbackBoard {
    pub fn new(surface: Rc<dyn Surface>, timer: Rc<dyn Timer>) -> Rc<Self> {
        Rc::new(Self {
            current: RefCell::new(None),
            generation: Cell::new(0),
            surface,
            timer,
        })
    }

    /// Replace whatever is showing and schedule its hide after `window`
    pub fn show(self: &Rc<Self>, feedback: Feedback, window: Duration) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        self.surface.paint_feedback(Some(&feedback));
        *self.current.borrow_mut() = Some((generation, feedback));

        let board = Rc::downgrade(self);
        self.timer.schedule(
            window,
            Box::new(move || {
                if let Some(board) = board.upgrade() {
                    board.expire(generation);
                }
            }),
        );

        generation
    }

    /// Hide the message if it is still the one shown at `generation`
    pub fn expire(&self, generation: u64) {
        let expired = matches!(&*self.current.borrow(), Some((current, _)) if *current == generation);
        if expired {
            self.current.borrow_mut().take();
            self.surface.paint_feedback(None);
        }
    }

    pub fn current(&self) -> Option<Feedback> {
        self.current.borrow().as_ref().map(|(_, feedback)| feedback.clone())
    }
}
