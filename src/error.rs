use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Radar input arity is structural: both sequences must hold exactly six entries.
    #[error(
        "radar chart requires 6 data points and 6 labels (got data={data_len}, labels={labels_len})"
    )]
    Configuration { data_len: usize, labels_len: usize },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
