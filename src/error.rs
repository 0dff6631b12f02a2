use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color format `{token}`: {reason}")]
    InvalidColorFormat { token: String, reason: String },

    #[error("dataset `{dataset}` has {actual} values, but {expected} categories are defined")]
    DataCategoryMismatch {
        dataset: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid drawing region: width={width}, height={height}")]
    InvalidRegion { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn invalid_color(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
