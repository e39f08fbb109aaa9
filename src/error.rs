#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid configuration: {source}")]
  InvalidConfig {
    #[from]
    source: serde_json::Error,
  },
  #[error("invalid keyword pattern: {source}")]
  InvalidKeyword {
    #[from]
    source: regex::Error,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
}
