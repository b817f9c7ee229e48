use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong when talking to the Govee cloud.
///
/// The variants are deliberately coarse: callers need to tell a missing
/// key file apart from a network failure, and a rejected device-list
/// request apart from an empty device list, but nothing finer-grained
/// than that.
#[derive(Debug, Error)]
pub enum GoveeError {
    /// The API key file was missing, unreadable, or empty. Raised before
    /// any network traffic happens.
    #[error("failed to load API key from {path}")]
    CredentialLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A request never completed at the socket level (DNS, connection
    /// refused, timeout). Distinct from the vendor rejecting a request.
    #[error("transport failure talking to the Govee API")]
    Transport(#[from] reqwest::Error),

    /// The device-list endpoint answered with a non-200 status. This is
    /// "discovery failed", not "zero devices".
    #[error("device list request rejected with HTTP status {status}")]
    Discovery { status: StatusCode },

    /// The device-list endpoint answered 200 but the body did not match
    /// the expected shape. Not retried.
    #[error("device list response did not match the expected shape")]
    MalformedResponse(#[from] serde_json::Error),
}
