use super::constants::{BUSY_LABEL, NOTICE_FAILURE, NOTICE_SUCCESS};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint answered with HTTP {0}")]
    Status(u16),
}

/// Map a response status to the submission outcome; any 2xx is success.
#[inline]
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub fn for_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self {
                kind: NoticeKind::Success,
                message: NOTICE_SUCCESS,
            },
            Err(_) => Self {
                kind: NoticeKind::Failure,
                message: NOTICE_FAILURE,
            },
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "success",
            NoticeKind::Failure => "error",
        }
    }
}

/// How the submit button should look.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub disabled: bool,
    pub label: String,
}

/// Submit-button lifecycle around a single in-flight request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Sending { original_label: String },
}

impl Submission {
    /// Enter the sending state. Returns `None` if a request is already in
    /// flight, so double submits are ignored.
    pub fn begin(&mut self, current_label: &str) -> Option<ButtonView> {
        if matches!(self, Submission::Sending { .. }) {
            return None;
        }
        *self = Submission::Sending {
            original_label: current_label.to_string(),
        };
        Some(ButtonView {
            disabled: true,
            label: BUSY_LABEL.to_string(),
        })
    }

    /// Leave the sending state, restoring the button and choosing a notice.
    pub fn finish(&mut self, result: &Result<(), SubmitError>) -> (ButtonView, Notice) {
        let label = match std::mem::take(self) {
            Submission::Sending { original_label } => original_label,
            Submission::Idle => String::new(),
        };
        (
            ButtonView {
                disabled: false,
                label,
            },
            Notice::for_result(result),
        )
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Submission::Sending { .. })
    }
}
