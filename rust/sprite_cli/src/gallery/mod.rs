// rust/sprite_cli/src/gallery/mod.rs
#![forbid(unsafe_code)]

pub mod bag;
pub mod runner;

pub use runner::{GalleryConfig, GalleryRunner, side_by_side};
