use thiserror::Error;

#[derive(Debug, Error)]
pub enum InflectionError {
    #[error("Invalid inflection rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Unknown transform `{0}`")]
    UnknownTransform(String),
}
