//! Dioxus UI components for dropkit.
//!
//! A single component today: the upload drop zone with its file
//! picker, state reporting, and remove capability.

mod upload_zone;

pub use upload_zone::{UploadState, UploadZone, UploadZoneProps};
