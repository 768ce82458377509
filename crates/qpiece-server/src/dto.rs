//! Request and response bodies specific to the HTTP layer.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" if responding.
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
    /// Backend that samples shots.
    pub machine: String,
    /// Widest register per circuit.
    pub max_qubits: u32,
}

impl HealthResponse {
    pub fn new(machine: &str, max_qubits: u32) -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            machine: machine.to_string(),
            max_qubits,
        }
    }
}

/// Query string of `GET /api/generateRandomNumber/`.
#[derive(Debug, Deserialize)]
pub struct RandomNumberQuery {
    #[serde(rename = "maxInt")]
    pub max_int: u64,
}

/// Body of `POST /api/determineSuperposition/`.
#[derive(Debug, Deserialize)]
pub struct DetermineRequest {
    pub prob: f64,
}
