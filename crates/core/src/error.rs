//! Launcher error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    /// A selection or instantiation named a title with no descriptor.
    #[error("no game registered under title {0:?}")]
    UnknownTitle(String),

    /// Registration-time only; the catalog is static, so this is fatal at startup.
    #[error("a game is already registered under title {0:?}")]
    DuplicateTitle(String),

    /// `instantiate` was called for a title that already has a live triad.
    /// Callers check liveness first; seeing this is a contract breach.
    #[error("game {0:?} already has a live instance")]
    AlreadyLive(String),

    /// A model, view or controller factory failed while building a triad.
    #[error("failed to build game {title:?}")]
    Factory {
        title: String,
        #[source]
        source: anyhow::Error,
    },
}

impl LauncherError {
    /// Title the error refers to.
    pub fn title(&self) -> &str {
        match self {
            LauncherError::UnknownTitle(title)
            | LauncherError::DuplicateTitle(title)
            | LauncherError::AlreadyLive(title) => title,
            LauncherError::Factory { title, .. } => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_error_keeps_source() {
        let err = LauncherError::Factory {
            title: "Snake".to_string(),
            source: anyhow::anyhow!("missing sprite sheet"),
        };
        assert_eq!(err.title(), "Snake");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("missing sprite sheet"));
    }

    #[test]
    fn messages_name_the_title() {
        let err = LauncherError::UnknownTitle("Chess".to_string());
        assert!(err.to_string().contains("Chess"));
    }
}
