pub mod error_shape;
pub mod guess;
