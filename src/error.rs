use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),
    #[error("Page {url} has no element matching: {what}")]
    MissingElement { url: String, what: String },

    #[error("Table has no column named {0}")]
    MissingColumn(String),
    #[error("Row {row} has no cell for column {column}")]
    MissingCell { column: String, row: usize },
    #[error("Couldn't cast value {value:?} in column {column} (row {row})")]
    Cast {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Ratings table should have exactly two labeled columns, found: {0:?}")]
    RatingsShape(Vec<String>),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
