use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid layout: {tile_count} tiles at pitch {pitch}")]
    InvalidLayout { tile_count: usize, pitch: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
