use thiserror::Error;

pub type TimetableResult<T> = Result<T, TimetableError>;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file type: {0} (expected .xlsx, .xlsm, .xlsb, .xls or .ods)")]
    UnsupportedFile(String),

    #[error("Failed to read spreadsheet: {0}")]
    Decode(String),

    #[error("No data found in the spreadsheet. Please check the file format.")]
    NoData,

    #[error("Invalid start date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    DateOverflow(String),
}

impl TimetableError {
    /// True for failures caused by the uploaded content rather than the caller
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TimetableError::UnsupportedFile(_) | TimetableError::Decode(_) | TimetableError::NoData
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_message() {
        let err = TimetableError::NoData;
        assert!(err.to_string().starts_with("No data found"));
    }

    #[test]
    fn test_invalid_date_message() {
        let err = TimetableError::InvalidDate("31/01/2024".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid start date '31/01/2024' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TimetableError = io.into();
        assert!(matches!(err, TimetableError::Io(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_input_errors() {
        assert!(TimetableError::NoData.is_input_error());
        assert!(TimetableError::Decode("bad zip".to_string()).is_input_error());
        assert!(TimetableError::UnsupportedFile("a.csv".to_string()).is_input_error());
        assert!(!TimetableError::InvalidDate("x".to_string()).is_input_error());
    }
}
