//! Status tones and their style classes

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of categories a status string maps to.
///
/// Only three literal statuses are recognized; everything else, including the
/// empty string and differently-cased spellings, falls into [`Tone::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// "Diproses": still being processed
    Processing,
    /// "Diterima": accepted
    Accepted,
    /// "Ditolak": rejected
    Rejected,
    /// Any other status
    Neutral,
}

/// Light and dark class halves of a tone plus their space-joined form.
struct ToneStyle {
    light: &'static str,
    dark: &'static str,
    joined: &'static str,
}

macro_rules! tone_style {
    ($light:literal, $dark:literal) => {
        ToneStyle {
            light: $light,
            dark: $dark,
            joined: concat!($light, " ", $dark),
        }
    };
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Processing,
        Tone::Accepted,
        Tone::Rejected,
        Tone::Neutral,
    ];

    /// Classify a status by exact, case-sensitive match.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Diproses" => Tone::Processing,
            "Diterima" => Tone::Accepted,
            "Ditolak" => Tone::Rejected,
            other => {
                tracing::trace!("Unrecognized status {:?}, using neutral tone", other);
                Tone::Neutral
            }
        }
    }

    /// The status literal that selects this tone, if there is one.
    pub fn status(self) -> Option<&'static str> {
        match self {
            Tone::Processing => Some("Diproses"),
            Tone::Accepted => Some("Diterima"),
            Tone::Rejected => Some("Ditolak"),
            Tone::Neutral => None,
        }
    }

    pub fn light_classes(self) -> &'static str {
        self.style().light
    }

    pub fn dark_classes(self) -> &'static str {
        self.style().dark
    }

    /// Light and dark classes joined into one class string.
    pub fn classes(self) -> &'static str {
        self.style().joined
    }

    fn style(self) -> ToneStyle {
        match self {
            Tone::Processing => tone_style!(
                "bg-yellow-400 text-black",
                "dark:bg-yellow-600 dark:text-white"
            ),
            Tone::Accepted => tone_style!(
                "bg-green-400 text-black",
                "dark:bg-green-600 dark:text-white"
            ),
            Tone::Rejected => tone_style!(
                "bg-red-400 text-black",
                "dark:bg-red-600 dark:text-white"
            ),
            Tone::Neutral => tone_style!(
                "bg-gray-300 text-black",
                "dark:bg-gray-600 dark:text-white"
            ),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Processing => write!(f, "Processing"),
            Tone::Accepted => write!(f, "Accepted"),
            Tone::Rejected => write!(f, "Rejected"),
            Tone::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Status shown for the neutral tone, which has no literal of its own
pub const NEUTRAL_SAMPLE: &str = "Lainnya";

/// One example status per tone, in [`Tone::ALL`] order.
pub fn sample_statuses() -> Vec<&'static str> {
    Tone::ALL
        .iter()
        .map(|tone| tone.status().unwrap_or(NEUTRAL_SAMPLE))
        .collect()
}

/// Style classes for a status string.
pub fn classes_for(status: &str) -> &'static str {
    Tone::from_status(status).classes()
}
