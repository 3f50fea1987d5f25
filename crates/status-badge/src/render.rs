//! HTML rendering of status badges

use maud::{html, Markup, Render};
use serde::Serialize;

use crate::tone::Tone;

/// Utility classes applied to every badge regardless of tone.
pub const BASE_CLASSES: &str = "px-2 py-1 rounded-full text-xs font-semibold";

/// A status paired with the tone it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    status: String,
    tone: Tone,
    classes: &'static str,
}

impl Badge {
    pub fn new(status: impl Into<String>) -> Self {
        let status = status.into();
        let tone = Tone::from_status(&status);
        Self {
            status,
            tone,
            classes: tone.classes(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Tone classes, without the base classes.
    pub fn classes(&self) -> &'static str {
        self.classes
    }

    /// Full class attribute value: base classes then tone classes.
    pub fn class_list(&self) -> String {
        format!("{} {}", BASE_CLASSES, self.classes)
    }

    /// The badge as an HTML fragment string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for Badge {
    fn render(&self) -> Markup {
        html! {
            div {
                span class=(self.class_list()) { (self.status) }
            }
        }
    }
}

/// Base classes plus the tone classes for `status`.
pub fn class_list(status: &str) -> String {
    format!("{} {}", BASE_CLASSES, crate::classes_for(status))
}

/// Render `status` as a `<div>`-wrapped `<span>` badge.
pub fn render(status: &str) -> String {
    Badge::new(status).to_html()
}
