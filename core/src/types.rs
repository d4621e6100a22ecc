use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record backing an answer, keyed by column name
pub type Row = Map<String, Value>;

/// Request body sent to the stats backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

impl AskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            message: query.into(),
        }
    }
}

/// Successful answer from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Human-readable answer
    pub message: String,
    /// Rows the answer was built from, in backend order
    pub data: Vec<Row>,
}

impl SuccessResponse {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Column names across all rows, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for row in &self.data {
            for key in row.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key.as_str());
                }
            }
        }
        columns
    }
}

/// Error body returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
