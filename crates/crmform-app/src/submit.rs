//! Submission handling
//!
//! The modal hands a snapshot of its values to a [`SubmitHandler`] and waits
//! for it to settle. What a submission means (an API call, a database write)
//! is up to the handler.

use chrono::{DateTime, Local};
use serde::Serialize;
use tokio::sync::mpsc;

use crmform_core::prelude::*;
use crmform_core::FormValues;

/// Receives the values of a submitted form
#[trait_variant::make(SubmitHandler: Send)]
pub trait LocalSubmitHandler {
    /// Persist one submission. An error keeps the modal open with its values.
    async fn submit(&self, values: FormValues) -> Result<()>;
}

/// One accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub submitted_at: DateTime<Local>,
    pub values: FormValues,
}

/// Forwards submissions over a channel to whoever owns the receiver
#[derive(Debug, Clone)]
pub struct ChannelSubmitHandler {
    tx: mpsc::Sender<Submission>,
}

impl ChannelSubmitHandler {
    pub fn new(tx: mpsc::Sender<Submission>) -> Self {
        Self { tx }
    }

    /// Handler plus the receiving end, with room for `capacity` pending submissions
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Submission>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

impl SubmitHandler for ChannelSubmitHandler {
    async fn submit(&self, values: FormValues) -> Result<()> {
        let submission = Submission {
            submitted_at: Local::now(),
            values,
        };
        self.tx
            .send(submission)
            .await
            .map_err(|_| Error::ChannelClosed)?;
        debug!("Submission forwarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crmform_core::FieldValue;

    #[tokio::test]
    async fn test_channel_handler_forwards_values() {
        let (handler, mut rx) = ChannelSubmitHandler::channel(4);
        let values: FormValues = [("company", "Acme")].into_iter().collect();

        SubmitHandler::submit(&handler, values.clone()).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.values, values);
        assert_eq!(
            received.values.get("company"),
            Some(&FieldValue::text("Acme"))
        );
    }

    #[tokio::test]
    async fn test_channel_handler_fails_when_receiver_dropped() {
        let (handler, rx) = ChannelSubmitHandler::channel(1);
        drop(rx);

        let err = SubmitHandler::submit(&handler, FormValues::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ChannelClosed));
    }

    #[test]
    fn test_submission_serializes_values_inline() {
        let submission = Submission {
            submitted_at: Local::now(),
            values: [("vip", true)].into_iter().collect(),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["values"]["vip"], serde_json::Value::Bool(true));
        assert!(json["submitted_at"].is_string());
    }
}
