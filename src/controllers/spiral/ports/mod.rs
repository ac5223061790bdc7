//! Port definitions for the spiral controller.
//!
//! The controller owns the pixel buffer; presenters only see it borrowed
//! for the duration of one present call.

pub mod presenter;
