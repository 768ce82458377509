//! Response shapes of the service boundary.

use serde::{Deserialize, Serialize};

/// `{"randomInt": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomIntResponse {
    #[serde(rename = "randomInt")]
    pub random_int: u64,
}

/// `{"result": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

impl<T> ResultResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}
