//! Input adapters that drive the spiral controller.

#[cfg(feature = "gui")]
pub mod gui;
