//! Status check records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hotbeans_core::traits::Document;
use hotbeans_core::types::StatusCheckId;

/// A liveness ping submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    /// Unique identifier.
    pub id: StatusCheckId,
    /// Name the client reported.
    pub client_name: String,
    /// When the ping was received.
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Build a new record from a create payload.
    pub fn new(input: CreateStatusCheck) -> Self {
        Self {
            id: StatusCheckId::new(),
            client_name: input.client_name,
            timestamp: Utc::now(),
        }
    }
}

impl Document for StatusCheck {
    const COLLECTION: &'static str = "status_checks";

    fn document_id(&self) -> String {
        self.id.to_string()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Data required to create a status check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStatusCheck {
    /// Name of the reporting client.
    pub client_name: String,
}
