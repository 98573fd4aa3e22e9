//! Shared building blocks for editor pages

/// Reactive property system for change notification
pub mod property;

pub use property::Property;
