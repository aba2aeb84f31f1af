use serde::{Deserialize, Serialize};

/// Response envelope for the allocation endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data,
        }
    }

    /// Create an unsuccessful response that still carries a data payload
    pub fn failure(error: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data,
        }
    }
}

/// Body used for plain request rejections
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
