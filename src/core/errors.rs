use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinderError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),
}

impl From<std::io::Error> for BinderError {
    fn from(error: std::io::Error) -> Self {
        BinderError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for BinderError {
    fn from(error: reqwest::Error) -> Self {
        BinderError::Reqwest(Box::new(error))
    }
}
