use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("no team found matching '{0}'")]
    TeamNotFound(String),
    #[error("not a recognised squad URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Fatal: the page does not carry the match log table at all.
    #[error("no match log table found in document")]
    TableNotFound,
    /// Recoverable: one row carries a value the schema cannot coerce. The
    /// row is skipped and extraction continues.
    #[error("field '{field}' has unparseable value '{raw}'")]
    FieldParse { field: &'static str, raw: String },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
