//! Presentation shell: reacts to the popup flag with a confirm/cancel dialog.
//!
//! The shell owns the flag. The host view only holds a [`Binding`] to it,
//! which its coordinator raises when the page posts `"open"`. On the next
//! loop iteration [`PresentationShell::observe`] notices and the dialog is
//! shown; either dismissal lowers the flag again.

mod alert;
mod native;

pub use alert::{AlertChoice, AlertPresenter, AlertContent, SHOW_ALERT};
pub use native::NativePresenter;

use hello_common::{Binding, State};
use tracing::{debug, info};

/// Whether the dialog is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Hidden,
    Visible,
}

/// Result of one presentation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

pub struct PresentationShell {
    show_alert: State<bool>,
    state: ShellState,
    last_outcome: Option<DialogOutcome>,
}

impl PresentationShell {
    pub fn new() -> Self {
        Self {
            show_alert: State::new(false),
            state: ShellState::Hidden,
            last_outcome: None,
        }
    }

    /// Two-way binding onto the popup flag, for the host view.
    pub fn binding(&self) -> Binding<bool> {
        self.show_alert.binding()
    }

    pub fn show_alert(&self) -> bool {
        self.show_alert.get()
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ShellState::Visible
    }

    /// Outcome of the most recent dismissal, if any.
    pub fn last_outcome(&self) -> Option<DialogOutcome> {
        self.last_outcome
    }

    /// Bring the state in line with the flag.
    pub fn observe(&mut self) -> ShellState {
        match (self.state, self.show_alert.get()) {
            (ShellState::Hidden, true) => {
                debug!("popup flag raised, showing dialog");
                self.state = ShellState::Visible;
            }
            (ShellState::Visible, false) => {
                debug!("popup flag lowered elsewhere, hiding dialog");
                self.state = ShellState::Hidden;
            }
            _ => {}
        }
        self.state
    }

    /// Confirm action. No-op unless the dialog is visible.
    pub fn confirm(&mut self) -> Option<DialogOutcome> {
        self.dismiss(DialogOutcome::Confirmed)
    }

    /// Cancel action. No-op unless the dialog is visible.
    pub fn cancel(&mut self) -> Option<DialogOutcome> {
        self.dismiss(DialogOutcome::Cancelled)
    }

    /// Show the dialog through `presenter` if visible and apply the choice.
    ///
    /// A dismissal without a button press takes the cancel path.
    pub fn present_with(&mut self, presenter: &dyn AlertPresenter) -> Option<DialogOutcome> {
        if !self.is_visible() {
            return None;
        }
        match presenter.present(&SHOW_ALERT) {
            AlertChoice::Confirm => self.confirm(),
            AlertChoice::Cancel | AlertChoice::Dismissed => self.cancel(),
        }
    }

    fn dismiss(&mut self, outcome: DialogOutcome) -> Option<DialogOutcome> {
        if !self.is_visible() {
            return None;
        }
        self.show_alert.set(false);
        self.state = ShellState::Hidden;
        self.last_outcome = Some(outcome);
        match outcome {
            DialogOutcome::Confirmed => info!("confirm tapped"),
            DialogOutcome::Cancelled => info!("cancel tapped"),
        }
        Some(outcome)
    }
}

impl Default for PresentationShell {
    fn default() -> Self {
        Self::new()
    }
}
