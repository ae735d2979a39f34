//! Administrator notification adapters
//!
//! The alert channel for rejected callbacks. `LoggingNotifier` hands the
//! alert to the operator's log pipeline; `RecordingNotifier` captures alerts
//! for assertions in tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::ports::AdminNotifier;
use crate::shared::error::AppResult;

/// Notifier that emits alerts into the structured log stream, tagged with
/// the configured recipient so a log-to-mail bridge can pick them up.
pub struct LoggingNotifier {
    admin_email: String,
}

impl LoggingNotifier {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

#[async_trait]
impl AdminNotifier for LoggingNotifier {
    async fn notify(&self, subject: &str, body: &str) -> AppResult<()> {
        warn!(
            recipient = %self.admin_email,
            subject = %subject,
            body = %body,
            "Administrator alert"
        );
        Ok(())
    }
}

/// Alert captured by the recording notifier
#[derive(Debug, Clone)]
pub struct AdminAlert {
    pub subject: String,
    pub body: String,
}

/// Notifier that records alerts in memory for test assertions
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<AdminAlert>>>,
}

impl RecordingNotifier {
    pub async fn sent(&self) -> Vec<AdminAlert> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl AdminNotifier for RecordingNotifier {
    async fn notify(&self, subject: &str, body: &str) -> AppResult<()> {
        self.sent.write().await.push(AdminAlert {
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
