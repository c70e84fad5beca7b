use odonto_types::ToothError;

#[derive(Debug, thiserror::Error)]
pub enum OdontogramError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no odontogram is bound to this session")]
    NotBound,
    #[error("invalid tooth: {0}")]
    Tooth(#[from] ToothError),
    #[error("request to the record service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("record service responded with HTTP {status}: {message}")]
    Endpoint { status: u16, message: String },
    #[error("record service rejected the request: {0}")]
    Rejected(String),
}

pub type OdontogramResult<T> = std::result::Result<T, OdontogramError>;
