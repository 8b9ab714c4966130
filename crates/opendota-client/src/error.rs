use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to retrieve result from OpenDota: {0}")]
    Connection(#[from] reqwest::Error),
    #[error("Failed to decode OpenDota response: {0}")]
    Decode(serde_json::Error, String),
    #[error("OpenDota responded with status {0}")]
    Status(reqwest::StatusCode),
}
