//! Greenhouse climate control panel core.
//!
//! Exposes the pure-logic modules behind the panel widgets for the console
//! binary and for integration testing.  No module here touches a terminal,
//! a window, or a sensor directly; see [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod sensors;
pub mod view;

pub use app::commands::PanelCommand;
pub use app::events::PanelEvent;
pub use app::service::ClimateControlPanel;
pub use error::{Error, Result};
