//! UI Components for the ROTTEN application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title bar with the settings button
//! - [`Instructions`] - How-to section (toggleable)
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`QueryForm`] - Query fields, archive picker and the submission workflow
//! - [`FieldGroup`] - Labeled input with focus highlight
//! - [`FilePicker`] - Hidden file input, proxy button and selected-file chip
//! - [`ResultPanel`] - Download link for the trimmed archive
//! - [`SettingsPanel`] - Slide-in panel with the two mode switches
//! - [`StatusBanner`] - Transient success/error notice
//! - [`ProcessingOverlay`] - Blocking overlay while a submission is in flight

mod header;
mod instructions;
mod field_group;
mod file_picker;
mod query_form;
mod result_panel;
mod settings_panel;
mod status_banner;
mod overlay;
mod footer;

pub use header::*;
pub use instructions::*;
pub use field_group::*;
pub use file_picker::*;
pub use query_form::*;
pub use result_panel::*;
pub use settings_panel::*;
pub use status_banner::*;
pub use overlay::*;
pub use footer::*;
