//! IPv6 connection page editor.
//!
//! Turns a stored IPv6 setting into editable text rows and back. The page
//! keeps address, DNS server and route rows alongside a method selector;
//! committing parses every row and either replaces the setting wholesale
//! or refuses with the first offending row.
//!
//! # Quick Start
//!
//! ```rust
//! use ip6_editor::{
//!     page::{AddressField, ConnectionPage, Ip6Page},
//!     settings::{Ip6Method, Ip6Settings},
//! };
//!
//! let mut setting = Ip6Settings::default();
//! let mut page = Ip6Page::new(&setting);
//!
//! let state = page.state_mut();
//! state.select_method(Ip6Method::Manual)?;
//! let row = state.addresses.append_blank();
//! state.addresses.set_text(row, AddressField::Address, "2001:db8::10");
//! state.addresses.set_text(row, AddressField::Prefix, "64");
//!
//! page.validate(&mut setting)?;
//! assert_eq!(setting.addresses.len(), 1);
//! # Ok::<(), ip6_editor::page::PageError>(())
//! ```

/// Shared reactive building blocks.
pub mod common;

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for inspecting and committing pages.
pub mod cli;

/// Editor pages, row lists and the reconciler.
pub mod page;

/// The IPv6 setting edited by the page.
pub mod settings;

/// Logging initialization.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{EditorError, Result};
