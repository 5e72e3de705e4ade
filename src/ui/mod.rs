//! UI layer: shared components, page chrome, and the route pages

pub mod common;
pub mod footer;
pub mod header;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod parallax;
pub mod reveal;
pub mod theme;
