use thiserror::Error;

/// Terminal failures. Any of these aborts the run; ids without a record
/// behind them are skipped by the driver and never reach this type.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request for {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cache I/O on {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("page structure changed: {0} not found")]
    MissingElement(&'static str),
}
