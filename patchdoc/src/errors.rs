//!
//! Crate errors
//!
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    #[error("Invalid field path '{0}'")]
    InvalidPath(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for String {
    fn from(err: Error) -> String {
        format!("{}", err)
    }
}
