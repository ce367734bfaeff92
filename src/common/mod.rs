pub mod animation;
pub mod colors;
pub mod constants;
pub mod error;
pub mod julia;
pub mod seeds;
