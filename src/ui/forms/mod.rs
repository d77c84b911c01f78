//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `journey_form`: The journey lead-capture form

mod field_renderer;
mod journey_form;

pub use journey_form::draw as draw_journey_form;
