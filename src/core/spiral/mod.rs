//! Spiral exploration state and direction choice.

pub mod direction;
pub mod pan_state;
