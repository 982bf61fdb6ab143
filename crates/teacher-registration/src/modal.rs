//! Dialog sequencing for the link and consent dialogs.

use std::fmt;
use tracing::debug;

/// Dialogs shown by the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// UDISE lookup and school linking.
    Link,
    /// Data-sharing declaration.
    Consent,
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialog::Link => f.write_str("link"),
            Dialog::Consent => f.write_str("consent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Tracks which dialog, if any, is open.
///
/// Dialogs are modal: opening one while another is open is refused.
#[derive(Debug, Clone, Default)]
pub struct ModalSequencer {
    link: DialogState,
    consent: DialogState,
}

impl ModalSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, dialog: Dialog) -> DialogState {
        match dialog {
            Dialog::Link => self.link,
            Dialog::Consent => self.consent,
        }
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        self.state(dialog) == DialogState::Open
    }

    /// The open dialog, if any.
    pub fn active(&self) -> Option<Dialog> {
        [Dialog::Link, Dialog::Consent]
            .into_iter()
            .find(|d| self.is_open(*d))
    }

    /// Open a dialog. Returns `false` when another dialog blocks it.
    pub fn open(&mut self, dialog: Dialog) -> bool {
        match self.active() {
            Some(active) if active == dialog => true,
            Some(active) => {
                debug!(%dialog, %active, "Dialog blocked by open dialog");
                false
            }
            None => {
                *self.slot(dialog) = DialogState::Open;
                debug!(%dialog, "Dialog opened");
                true
            }
        }
    }

    /// Close a dialog. Returns `false` if it was not open.
    pub fn close(&mut self, dialog: Dialog) -> bool {
        let slot = self.slot(dialog);
        let was_open = *slot == DialogState::Open;
        *slot = DialogState::Closed;
        if was_open {
            debug!(%dialog, "Dialog closed");
        }
        was_open
    }

    fn slot(&mut self, dialog: Dialog) -> &mut DialogState {
        match dialog {
            Dialog::Link => &mut self.link,
            Dialog::Consent => &mut self.consent,
        }
    }
}
