//! Toast notification content.
//!
//! A toast is a message plus a free-form kind tag. The kind becomes an
//! `alert-{kind}` class for styling; only `success` and `error` pick a
//! dedicated icon, every other tag gets the info icon.

use crate::consts::{ALERT_BASE_CLASS, DEFAULT_TOAST_KIND};

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Class of the inner flex row holding icon and text.
pub const TOAST_ROW_CLASS: &str = "d-flex align-items-center";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Font Awesome glyph name.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Info => "info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: String,
}

impl Toast {
    /// A toast of `kind`, defaulting to `success`.
    pub fn new(message: impl Into<String>, kind: Option<&str>) -> Self {
        Self { message: message.into(), kind: kind.unwrap_or(DEFAULT_TOAST_KIND).to_owned() }
    }

    pub fn severity(&self) -> Severity {
        Severity::from_kind(&self.kind)
    }

    /// Class list of the outer toast element.
    pub fn class_name(&self) -> String {
        format!("{ALERT_BASE_CLASS} alert-{}", self.kind)
    }

    /// Class list of the `<i>` icon element.
    pub fn icon_class(&self) -> String {
        format!("fas fa-{} me-2", self.severity().glyph())
    }
}
