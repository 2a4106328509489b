/// Stable numeric codes attached to every classified failure.
///
/// Codes are part of the public error contract: clients may match on them, so an
/// existing code never changes meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// General, uncontrolled errors.
    Generic,
    /// Bootstrap failure: configuration or listener binding.
    AppLoad,
    /// Database could not be reached or migrated at startup.
    DatabaseConnection,
    /// Body could not be read as an operation request.
    InvalidRequest,
    /// Body was readable but one or more fields were invalid.
    InvalidParams,
    OperationSave,
    OperationFind,
    OperationCalculate,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        match self {
            Self::Generic => 1000,
            Self::AppLoad => 1001,
            Self::DatabaseConnection => 1002,
            Self::InvalidRequest => 1004,
            Self::InvalidParams => 1005,
            Self::OperationSave => 1007,
            Self::OperationFind => 1008,
            Self::OperationCalculate => 1009,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Generic => "General, uncontrolled errors",
            Self::AppLoad => "Errors during application loading",
            Self::DatabaseConnection => "Database connection failures",
            Self::InvalidRequest => "Malformed request such as unreadable or missing message body",
            Self::InvalidParams => "Malformed request with invalid data submitted",
            Self::OperationSave => "Errors saving records to the database",
            Self::OperationFind => "Errors retrieving records from the database",
            Self::OperationCalculate => "Errors performing mathematical operation calculations",
        }
    }
}
