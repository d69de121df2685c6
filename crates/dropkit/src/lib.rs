//! dropkit: Drag-and-drop file upload widget for Dioxus.
//!
//! Provides the [`UploadZone`] component: a drop zone with a file
//! picker that screens candidates against a MIME/size policy, encodes
//! accepted files as base64 data URLs, and reports the resulting list
//! and widget state to the host through callbacks.
//!
//! The pure screening and encoding logic lives in `dropkit-core`; this
//! crate adds the browser integration (asynchronous file reads,
//! object-URL previews) and the UI.

pub mod components;
pub mod preview;

pub use components::{UploadState, UploadZone, UploadZoneProps};
