//! UI components.

pub mod night_sky;
