//! dropkit-core: Pure file screening and encoding logic (sans-IO).
//!
//! Turns one selection-or-drop event into a resolved outcome:
//! screening -> data-URL encoding -> ordered accepted-file list.
//!
//! This crate has **no browser dependencies** -- it operates on
//! in-memory metadata and byte slices and returns structured data. All
//! DOM and file interaction lives in `dropkit`, which drives the
//! [`batch::BatchRun`] state machine defined here.

pub mod batch;
pub mod config;
pub mod data_url;
pub mod list;

pub use batch::{
    AcceptedFile, BatchInput, BatchOutcome, BatchRun, Candidate, FileMeta, RejectReason, Rejection,
};
pub use config::{DEFAULT_ACCEPTED_TYPES, DEFAULT_MAX_SIZE_BYTES, UploadConfig};
pub use list::FileList;
