//! Shared response envelopes
//!
//! Mutation endpoints answer with a small acknowledgement body; batch
//! endpoints add a created count. Fields are optional because the portal is
//! not strict about which it includes.

use serde::Deserialize;

/// Acknowledgement for create/update/delete calls.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Acknowledgement for batch-create calls.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created: Option<u64>,
}

impl BatchAck {
    pub fn summary(&self, submitted: usize) -> String {
        match (&self.message, self.created) {
            (Some(message), _) => message.clone(),
            (None, Some(created)) => format!("created {created} of {submitted} records"),
            (None, None) => format!("submitted {submitted} records"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_summary_falls_back_sensibly() {
        let ack: BatchAck = serde_json::from_str(r#"{"message":"ok","created":3}"#).unwrap();
        assert_eq!(ack.summary(3), "ok");

        let ack: BatchAck = serde_json::from_str(r#"{"created":2}"#).unwrap();
        assert_eq!(ack.summary(5), "created 2 of 5 records");

        let ack: BatchAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.summary(4), "submitted 4 records");
    }
}
