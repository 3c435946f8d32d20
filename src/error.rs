// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Surface Error: {0}")]
    Surface(#[from] SurfaceError),
    /// The toast service task is gone; nothing can be enqueued anymore.
    #[error("toast service is no longer running")]
    ServiceClosed,
}

/// Failures reported by a presentation surface.
///
/// The queue never forwards these to callers of `enqueue`; a failed
/// presentation is logged and the queue moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// No window scene is available to host the overlay.
    #[error("no window scene available")]
    NoScene,
    /// The platform backend refused the request.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
