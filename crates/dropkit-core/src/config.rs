//! Acceptance policy for candidate files.

use serde::{Deserialize, Serialize};

use crate::batch::{FileMeta, RejectReason};

/// MIME types accepted when the host configures none.
pub const DEFAULT_ACCEPTED_TYPES: [&str; 2] = ["text/plain", "application/pdf"];

/// Default upper bound on candidate size: 4 MB (decimal).
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 4_000_000;

/// Configuration of the upload widget's acceptance policy.
///
/// Screening applies the type check before the size check, so a
/// candidate failing both is reported as unsupported, not oversized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Whether the file picker allows selecting several files at once.
    ///
    /// Affects only the picker element. A batch is always processed in
    /// full regardless: a drop can deliver any number of files.
    pub multiple: bool,

    /// MIME types the widget accepts, compared ASCII-case-insensitively
    /// against each candidate's reported type.
    pub accepted_types: Vec<String>,

    /// Maximum accepted file size in bytes. Candidates strictly larger
    /// are rejected; a candidate of exactly this size passes.
    pub max_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            accepted_types: DEFAULT_ACCEPTED_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

impl UploadConfig {
    /// Returns `true` if `mime_type` matches one of the accepted types.
    #[must_use]
    pub fn accepts_type(&self, mime_type: &str) -> bool {
        self.accepted_types
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(mime_type))
    }

    /// Screen one candidate against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason::UnsupportedType`] if the reported MIME
    /// type is not accepted, otherwise [`RejectReason::Oversized`] if
    /// the candidate exceeds `max_size_bytes`.
    pub fn screen(&self, meta: &FileMeta) -> Result<(), RejectReason> {
        if !self.accepts_type(&meta.mime_type) {
            return Err(RejectReason::UnsupportedType {
                mime_type: meta.mime_type.clone(),
            });
        }
        if meta.size_bytes > self.max_size_bytes {
            return Err(RejectReason::Oversized {
                size_bytes: meta.size_bytes,
                limit_bytes: self.max_size_bytes,
            });
        }
        Ok(())
    }

    /// Value for a file input's `accept` attribute: the accepted types
    /// joined with commas.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.accepted_types.join(",")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn meta(name: &str, mime_type: &str, size_bytes: u64) -> FileMeta {
        FileMeta {
            name: name.to_owned(),
            mime_type: mime_type.to_owned(),
            size_bytes,
        }
    }

    #[test]
    fn defaults_accept_plain_text_and_pdf_up_to_4mb() {
        let config = UploadConfig::default();
        assert!(!config.multiple);
        assert_eq!(config.accepted_types, ["text/plain", "application/pdf"]);
        assert_eq!(config.max_size_bytes, 4_000_000);
    }

    #[test]
    fn screen_accepts_a_matching_candidate() {
        let config = UploadConfig::default();
        assert!(config.screen(&meta("notes.txt", "text/plain", 120)).is_ok());
    }

    #[test]
    fn screen_rejects_unknown_type() {
        let config = UploadConfig::default();
        let result = config.screen(&meta("photo.png", "image/png", 120));
        assert_eq!(
            result,
            Err(RejectReason::UnsupportedType {
                mime_type: "image/png".to_owned(),
            }),
        );
    }

    #[test]
    fn screen_checks_type_before_size() {
        // A candidate failing both checks reports the type failure.
        let config = UploadConfig::default();
        let result = config.screen(&meta("huge.png", "image/png", 10_000_000));
        assert!(matches!(
            result,
            Err(RejectReason::UnsupportedType { .. }),
        ));
    }

    #[test]
    fn screen_size_limit_is_inclusive() {
        let config = UploadConfig::default();
        assert!(
            config
                .screen(&meta("exact.txt", "text/plain", 4_000_000))
                .is_ok()
        );
        assert_eq!(
            config.screen(&meta("over.txt", "text/plain", 4_000_001)),
            Err(RejectReason::Oversized {
                size_bytes: 4_000_001,
                limit_bytes: 4_000_000,
            }),
        );
    }

    #[test]
    fn mime_comparison_ignores_ascii_case() {
        let config = UploadConfig::default();
        assert!(config.accepts_type("Text/Plain"));
        assert!(config.screen(&meta("a.txt", "TEXT/PLAIN", 1)).is_ok());
    }

    #[test]
    fn empty_reported_type_is_rejected_by_default_policy() {
        let config = UploadConfig::default();
        assert!(matches!(
            config.screen(&meta("mystery.bin", "", 1)),
            Err(RejectReason::UnsupportedType { .. }),
        ));
    }

    #[test]
    fn accept_attribute_joins_types_with_commas() {
        let config = UploadConfig::default();
        assert_eq!(config.accept_attribute(), "text/plain,application/pdf");
    }

    #[test]
    fn config_serde_round_trip() {
        let config = UploadConfig {
            multiple: true,
            accepted_types: vec!["image/png".to_owned()],
            max_size_bytes: 1000,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: UploadConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
