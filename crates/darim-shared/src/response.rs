//! Response envelope used by every blog server endpoint.

use serde::{Deserialize, Serialize};

/// Successful responses wrap their payload as `{"data": ...}`.
/// Error responses are plain text bodies with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}
