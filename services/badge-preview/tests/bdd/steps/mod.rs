//! BDD step definitions for the badge preview service

pub mod rendering_steps;
