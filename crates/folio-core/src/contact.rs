//! Contact form submission state machine.
//!
//! ```text
//!   Idle ──submit──▶ Submitting ──response / failure──▶ Idle
//! ```
//!
//! The host performs the POST. This module decides what the status line
//! says, whether fields are reset, and guarantees the submit control comes
//! back on whatever the outcome.

use std::fmt;

use serde::Deserialize;

use crate::messages::Messages;

/// CSS color used for a successful submission.
pub const SUCCESS_COLOR: &str = "var(--success)";
/// CSS color used for a failed submission.
pub const ERROR_COLOR: &str = "var(--error)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Idle,
    Submitting,
}

/// Status line styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Leave the current color alone.
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    /// CSS color to set, if any.
    #[must_use]
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Success => Some(SUCCESS_COLOR),
            Self::Error => Some(ERROR_COLOR),
        }
    }
}

/// Text and tone for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStatus {
    pub text: &'static str,
    pub tone: StatusTone,
}

/// Why a submission failed. Only ever logged; the user sees a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Non-success response, with the server message or a status summary.
    Remote(String),
    /// The request never produced a response.
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(msg) => write!(f, "remote error: {msg}"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a submission response.
///
/// `body` is only consulted for non-success statuses. A missing, malformed or
/// non-object body counts as `{}`.
pub fn classify_response(status: u16, status_text: &str, body: Option<&str>) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let parsed = body
        .and_then(|b| serde_json::from_str::<ErrorBody>(b).ok())
        .unwrap_or_default();
    let message = match parsed.error.filter(|e| !e.is_empty()) {
        Some(msg) => msg,
        None => format!("status {status} {status_text}").trim_end().to_string(),
    };
    Err(SubmitError::Remote(message))
}

/// Host side of the contact form.
pub trait FormSurface {
    fn set_status(&mut self, status: FormStatus);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Clear every field back to its initial value.
    fn reset_fields(&mut self);
}

/// Drives a [`FormSurface`] through one submission at a time.
#[derive(Debug, Clone)]
pub struct ContactController {
    phase: ContactPhase,
    messages: &'static Messages,
}

impl ContactController {
    #[must_use]
    pub fn new(messages: &'static Messages) -> Self {
        Self {
            phase: ContactPhase::Idle,
            messages,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Enter `Submitting`: disable the control and show the sending status.
    pub fn begin(&mut self, surface: &mut impl FormSurface) {
        self.phase = ContactPhase::Submitting;
        surface.set_status(FormStatus {
            text: self.messages.sending,
            tone: StatusTone::Neutral,
        });
        surface.set_submit_enabled(false);
    }

    /// Leave `Submitting` with the request outcome.
    ///
    /// The submit control is re-enabled on every path.
    pub fn finish(&mut self, surface: &mut impl FormSurface, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                tracing::info!("contact form sent");
                surface.set_status(FormStatus {
                    text: self.messages.sent,
                    tone: StatusTone::Success,
                });
                surface.reset_fields();
            }
            Err(err) => {
                tracing::error!(error = %err, "contact form failed");
                surface.set_status(FormStatus {
                    text: self.messages.send_failed,
                    tone: StatusTone::Error,
                });
            }
        }
        surface.set_submit_enabled(true);
        self.phase = ContactPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct FakeForm {
        status: Option<FormStatus>,
        color: Option<&'static str>,
        submit_enabled: bool,
        fields: Vec<String>,
    }

    impl FakeForm {
        fn filled() -> Self {
            Self {
                submit_enabled: true,
                fields: vec!["Ada".into(), "ada@example.com".into(), "Hello".into()],
                ..Self::default()
            }
        }
    }

    impl FormSurface for FakeForm {
        fn set_status(&mut self, status: FormStatus) {
            if let Some(color) = status.tone.color() {
                self.color = Some(color);
            }
            self.status = Some(status);
        }

        fn set_submit_enabled(&mut self, enabled: bool) {
            self.submit_enabled = enabled;
        }

        fn reset_fields(&mut self) {
            self.fields.iter_mut().for_each(String::clear);
        }
    }

    fn submit(form: &mut FakeForm, status: u16, status_text: &str, body: Option<&str>) -> ContactController {
        let mut ctl = ContactController::new(&Messages::TURKISH);
        ctl.begin(form);
        assert_eq!(ctl.phase(), ContactPhase::Submitting);
        assert!(!form.submit_enabled);
        assert_eq!(form.status.unwrap().text, Messages::TURKISH.sending);
        ctl.finish(form, classify_response(status, status_text, body));
        ctl
    }

    #[test]
    fn success_shows_thanks_and_clears_fields() {
        let mut form = FakeForm::filled();
        let ctl = submit(&mut form, 200, "OK", None);
        assert_eq!(form.status.unwrap().text, Messages::TURKISH.sent);
        assert_eq!(form.color, Some(SUCCESS_COLOR));
        assert!(form.fields.iter().all(String::is_empty));
        assert!(form.submit_enabled);
        assert_eq!(ctl.phase(), ContactPhase::Idle);
    }

    #[test]
    fn server_error_text_is_not_shown() {
        let mut form = FakeForm::filled();
        submit(&mut form, 500, "Internal Server Error", Some(r#"{"error":"x"}"#));
        let status = form.status.unwrap();
        assert_eq!(status.text, Messages::TURKISH.send_failed);
        assert_ne!(status.text, "x");
        assert_eq!(form.color, Some(ERROR_COLOR));
        assert_eq!(form.fields[0], "Ada");
        assert!(form.submit_enabled);
    }

    #[test]
    fn transport_failure_reenables_submit() {
        let mut form = FakeForm::filled();
        let mut ctl = ContactController::new(&Messages::ENGLISH);
        ctl.begin(&mut form);
        ctl.finish(&mut form, Err(SubmitError::Transport("offline".into())));
        assert_eq!(form.status.unwrap().text, Messages::ENGLISH.send_failed);
        assert!(form.submit_enabled);
        assert_eq!(ctl.phase(), ContactPhase::Idle);
    }

    #[test]
    fn sending_status_keeps_previous_color() {
        let mut form = FakeForm::filled();
        submit(&mut form, 500, "", None);
        let mut ctl = ContactController::new(&Messages::TURKISH);
        ctl.begin(&mut form);
        assert_eq!(form.color, Some(ERROR_COLOR));
    }

    #[test]
    fn remote_error_uses_body_message() {
        assert_eq!(
            classify_response(422, "Unprocessable Entity", Some(r#"{"error":"invalid email"}"#)),
            Err(SubmitError::Remote("invalid email".into()))
        );
    }

    #[test]
    fn remote_error_falls_back_to_status() {
        for body in [None, Some(""), Some("<html>"), Some("[1,2]"), Some(r#"{"error":""}"#), Some(r#"{"error":7}"#)] {
            assert_eq!(
                classify_response(503, "Service Unavailable", body),
                Err(SubmitError::Remote("status 503 Service Unavailable".into())),
                "body={body:?}"
            );
        }
        assert_eq!(
            classify_response(500, "", None),
            Err(SubmitError::Remote("status 500".into()))
        );
    }

    #[test]
    fn any_2xx_is_success() {
        assert_eq!(classify_response(201, "Created", Some("not json")), Ok(()));
        assert_eq!(classify_response(299, "", None), Ok(()));
    }
}
