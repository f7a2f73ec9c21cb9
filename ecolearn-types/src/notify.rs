use std::fmt;

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Lowercase name, as used in alert styling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The transient user-facing message surface.
///
/// Fire and forget: implementations decide how (and whether) to render
/// the message, and no return value is consumed. The quiz flow receives
/// a notifier as an injected dependency rather than reaching for a
/// process-wide one, which keeps it testable in isolation.
pub trait Notifier {
    /// Surface a message to the user.
    fn notify(&self, message: &str, severity: Severity);
}

/// A notifier that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}
