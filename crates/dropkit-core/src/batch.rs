//! Per-event batch processing: candidates, rejections, outcomes.
//!
//! One [`BatchRun`] corresponds to one selection-or-drop event. The
//! driver pulls screened candidates in input order, reads and encodes
//! each one, reports the result back, and finally resolves the run
//! into a [`BatchOutcome`] the host applies to its file list.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::UploadConfig;

/// Metadata of one candidate file as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name, including extension.
    pub name: String,
    /// Reported MIME type. Empty when the platform does not recognize
    /// the file's type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// One fully processed, accepted file.
///
/// Every field is required at construction, so a partially encoded
/// entry can never appear in a file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedFile {
    /// Temporary display handle: an object URL, or the data URL itself
    /// when no object URL could be created.
    pub preview_url: String,
    /// The file's content as a base64 `data:` URL.
    pub encoded_content: String,
    /// Reported MIME type.
    pub mime_type: String,
    /// File name, including extension.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Why a candidate was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// The reported MIME type is not in the accepted set.
    #[error("unsupported file type {mime_type:?}")]
    UnsupportedType {
        /// The candidate's reported MIME type (possibly empty).
        mime_type: String,
    },

    /// The candidate exceeds the configured size limit.
    #[error("file is {size_bytes} bytes, limit is {limit_bytes}")]
    Oversized {
        /// Reported size of the candidate.
        size_bytes: u64,
        /// The configured `max_size_bytes`.
        limit_bytes: u64,
    },

    /// Reading or encoding the candidate failed.
    #[error("failed to encode file: {message}")]
    EncodingFailed {
        /// Platform error message, for logging.
        message: String,
    },
}

/// A candidate that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Name of the skipped candidate.
    pub file_name: String,
    /// Why it was skipped.
    pub reason: RejectReason,
}

/// The file list carried by one selection-or-drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInput {
    /// The event carried no file list at all, as opposed to an empty
    /// one. The host's current list must be left untouched.
    Missing,
    /// The candidates to screen and encode, in event order.
    Candidates(Vec<FileMeta>),
}

/// A screened candidate handed back to the driver for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the event's file list, before screening.
    pub index: usize,
    /// The candidate's metadata.
    pub meta: FileMeta,
}

/// Resolution of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// The accepted files, in input order.
    ///
    /// `None` when the event carried no file list; the host leaves its
    /// current list alone and only resets the loading flag. `Some`,
    /// even when empty, replaces the current list wholesale.
    pub files: Option<Vec<AcceptedFile>>,
    /// Every skipped candidate, in the order encountered.
    pub rejections: Vec<Rejection>,
}

/// State machine for one selection-or-drop event.
///
/// Screening happens as candidates are pulled, so rejections interleave
/// with acceptances in input order. A run may be resolved early (the
/// driver abandons a superseded batch); unpulled candidates are then
/// simply dropped.
#[derive(Debug)]
pub struct BatchRun {
    config: UploadConfig,
    pending: VecDeque<Candidate>,
    missing: bool,
    accepted: Vec<AcceptedFile>,
    rejections: Vec<Rejection>,
}

impl BatchRun {
    /// Begin a batch for one event.
    #[must_use]
    pub fn new(config: UploadConfig, input: BatchInput) -> Self {
        let (pending, missing) = match input {
            BatchInput::Missing => (VecDeque::new(), true),
            BatchInput::Candidates(metas) => (
                metas
                    .into_iter()
                    .enumerate()
                    .map(|(index, meta)| Candidate { index, meta })
                    .collect(),
                false,
            ),
        };
        Self {
            config,
            pending,
            missing,
            accepted: Vec::new(),
            rejections: Vec::new(),
        }
    }

    /// Next candidate that passes screening, in input order.
    ///
    /// Candidates failing the policy are recorded as rejections and
    /// skipped; a rejection never aborts the batch. Returns `None`
    /// once the event's file list is drained.
    pub fn next_candidate(&mut self) -> Option<Candidate> {
        while let Some(candidate) = self.pending.pop_front() {
            match self.config.screen(&candidate.meta) {
                Ok(()) => return Some(candidate),
                Err(reason) => self.rejections.push(Rejection {
                    file_name: candidate.meta.name,
                    reason,
                }),
            }
        }
        None
    }

    /// Record a successfully encoded candidate.
    ///
    /// Called in pull order by a sequential driver, which is what
    /// keeps accepted files in input order.
    pub fn accept(&mut self, candidate: Candidate, preview_url: String, encoded_content: String) {
        self.accepted.push(AcceptedFile {
            preview_url,
            encoded_content,
            mime_type: candidate.meta.mime_type,
            name: candidate.meta.name,
            size_bytes: candidate.meta.size_bytes,
        });
    }

    /// Record a candidate whose read or encode step failed.
    ///
    /// The batch continues; the failure surfaces as an
    /// [`RejectReason::EncodingFailed`] rejection.
    pub fn fail(&mut self, candidate: Candidate, message: String) {
        self.rejections.push(Rejection {
            file_name: candidate.meta.name,
            reason: RejectReason::EncodingFailed { message },
        });
    }

    /// Resolve the batch.
    #[must_use]
    pub fn finish(self) -> BatchOutcome {
        BatchOutcome {
            files: if self.missing {
                None
            } else {
                Some(self.accepted)
            },
            rejections: self.rejections,
        }
    }
}
