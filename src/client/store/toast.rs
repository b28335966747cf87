//! One-at-a-time toast notifications with timed dismissal.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::client::config::TOAST_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastStore {
    current: Signal<Option<Toast>>,
    next_id: Signal<u64>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(0),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.read().clone()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    /// Shows a toast, replacing any current one, and schedules its dismissal.
    /// The id check keeps an old timer from tearing down a newer toast.
    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.current.set(Some(Toast { id, kind, message }));

        let mut store = *self;
        spawn(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            let still_current = store
                .current
                .peek()
                .as_ref()
                .map(|toast| toast.id == id)
                .unwrap_or(false);
            if still_current {
                store.current.set(None);
            }
        });
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}
