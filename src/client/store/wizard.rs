//! Per-visit state of the management wizard: the shared form and which tabs
//! have saved something this visit.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::client::form::wizard::{WizardField, WizardTab};
use crate::client::form::FormState;

#[derive(Clone, Copy)]
pub struct WizardStore {
    pub form: Signal<FormState<WizardField>>,
    completed: Signal<HashSet<WizardTab>>,
    pub active_tab: Signal<WizardTab>,
}

impl WizardStore {
    pub fn new() -> Self {
        Self {
            form: Signal::new(FormState::default()),
            completed: Signal::new(HashSet::new()),
            active_tab: Signal::new(WizardTab::Stock),
        }
    }

    pub fn mark_complete(&mut self, tab: WizardTab) {
        self.completed.write().insert(tab);
    }

    pub fn is_complete(&self, tab: WizardTab) -> bool {
        self.completed.read().contains(&tab)
    }
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new()
    }
}
