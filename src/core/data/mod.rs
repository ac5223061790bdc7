pub mod colour;
pub mod fixed;
pub mod pixel_buffer;
pub mod plane_coordinate;
pub mod point;
