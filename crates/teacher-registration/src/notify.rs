//! User-visible notifications.

use std::fmt;
use tracing::{error, info};

/// Translation keys of the messages the flow emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    SuccessfullyLinked,
    UserRegisteredSuccessfully,
    ErrorWhileRegisterUser,
    AadharVerificationFailed,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::SuccessfullyLinked => "SUCCESSFULLY_LINKED",
            MessageKey::UserRegisteredSuccessfully => "USER_REGISTERED_SUCCESSFULLY",
            MessageKey::ErrorWhileRegisterUser => "ERROR_WHILE_REGISTER_USER",
            MessageKey::AadharVerificationFailed => "AADHAR_VERIFICATION_FAILED",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Delivers toast notifications. Translation happens on the other side.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, message: MessageKey);

    fn success(&self, message: MessageKey) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: MessageKey) {
        self.notify(ToastKind::Error, message);
    }
}

/// Notifier writing toasts to the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: ToastKind, message: MessageKey) {
        match kind {
            ToastKind::Success => info!(message = %message, "Toast"),
            ToastKind::Error => error!(message = %message, "Toast"),
        }
    }
}
