//! Shared UI primitives

mod button;
mod form;
mod tabs;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::FormField;
pub use tabs::{TabItem, TabPanel, Tabs};
