//! Status Badge
//!
//! Maps a status string ("Diproses", "Diterima", "Ditolak", or anything else)
//! to a set of light/dark style classes and renders it as a small HTML badge.

pub mod render;
pub mod tone;

pub use render::{class_list, render, Badge, BASE_CLASSES};
pub use tone::{classes_for, sample_statuses, Tone, NEUTRAL_SAMPLE};
