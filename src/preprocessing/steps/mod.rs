//! Individual preprocessing steps

pub mod denoise;
pub mod resize;
pub mod rgb;
