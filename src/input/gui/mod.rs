//! Windowed front end: a fixed-size winit window presenting one spiral
//! frame per event-loop iteration through a `pixels` surface.

pub mod commands;
