use crate::domain::payment_type::PaymentTypeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentSheetError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Catalog error: {0}")]
    CatalogError(String),
    #[error("Action unavailable: {0}")]
    ActionUnavailable(&'static str),
    #[error("Invalid command: {0}")]
    CommandError(String),
    #[error("Unknown payment type: {0}")]
    UnknownPaymentType(PaymentTypeId),
    #[error("Session closed")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, PaymentSheetError>;
