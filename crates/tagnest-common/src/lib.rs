//! Common utilities for tagnest front ends.
//!
//! This crate provides shared presentation infrastructure:
//! - **Themes** - light and dark terminal color palettes
//! - **Notices** - colored, de-duplicated user-facing messages on stderr

pub mod notice;
pub mod theme;

pub use theme::{Palette, Theme};
