use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("source `{name}` is unreadable: {source}")]
    SourceUnreadable {
        name: String,
        #[source]
        source: csv::Error,
    },

    #[error("upload task failed: {0}")]
    UploadJoin(String),

    #[error("svg export failed: {0}")]
    ExportIo(#[from] std::io::Error),
}
