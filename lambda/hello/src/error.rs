use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::scan::ScanError as SdkScanError;
use thiserror::Error;

/// Returned to the runtime when the request can't be answered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HelloError {
    #[error("no name was provided in the HTTP body")]
    NameNotProvided,
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("no AWS region could be resolved")]
    MissingRegion,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("table handle is not initialized")]
    Unavailable,
    #[error("table not found")]
    TableNotFound,
    #[error("throughput exceeded")]
    ThroughputExceeded,
    #[error("request limit exceeded")]
    RequestLimitExceeded,
    #[error("DynamoDB internal server error")]
    Internal,
    #[error("scan failed: {0}")]
    Other(String),
}

/// Map a Scan SDK error to ScanError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<SdkScanError, R>) -> ScanError {
    match err {
        SdkError::ServiceError(_) => match err.into_service_error() {
            SdkScanError::ResourceNotFoundException(_) => ScanError::TableNotFound,
            SdkScanError::ProvisionedThroughputExceededException(_) => {
                ScanError::ThroughputExceeded
            }
            SdkScanError::RequestLimitExceeded(_) => ScanError::RequestLimitExceeded,
            SdkScanError::InternalServerError(_) => ScanError::Internal,
            err => ScanError::Other(format!("{:?}", err)),
        },
        // construction, dispatch and timeout failures carry no service error
        err => ScanError::Other(err.to_string()),
    }
}
