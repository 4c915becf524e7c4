use madfam_leads::leads::{
    LeadId, LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadWebhook,
    NotificationError, RepositoryError, WebhookDispatcher, WebhookError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local lead store; records are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;
        if guard.contains_key(&record.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.lead_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}

/// Mail queue stand-in: confirmations are logged and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LoggingNotifier;

impl LeadNotifier for LoggingNotifier {
    fn enqueue(&self, notification: LeadNotification) -> Result<(), NotificationError> {
        info!(
            lead_id = %notification.lead_id.0,
            template = %notification.template,
            subject = %notification.subject,
            locale = notification.locale.code(),
            "confirmation e-mail queued"
        );
        Ok(())
    }
}

/// Posts lead events to the CRM on a background task. Delivery is at-most-once.
#[derive(Clone)]
pub(crate) struct HttpWebhookDispatcher {
    client: reqwest::Client,
    url: String,
}

impl HttpWebhookDispatcher {
    pub(crate) fn new(url: String, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| WebhookError::Transport(err.to_string()))?;
        Ok(Self { client, url })
    }
}

impl WebhookDispatcher for HttpWebhookDispatcher {
    fn dispatch(&self, webhook: LeadWebhook) -> Result<(), WebhookError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|err| WebhookError::Transport(err.to_string()))?;
        let client = self.client.clone();
        let url = self.url.clone();
        let lead_id = webhook.lead_id.0.clone();

        runtime.spawn(async move {
            let delivery = client
                .post(&url)
                .json(&webhook)
                .send()
                .await
                .and_then(|response| response.error_for_status());
            match delivery {
                Ok(response) => {
                    debug!(lead_id = %lead_id, status = %response.status(), "lead webhook delivered")
                }
                Err(error) => warn!(lead_id = %lead_id, %error, "lead webhook delivery failed"),
            }
        });

        Ok(())
    }
}

/// CRM hook selected from configuration.
#[derive(Clone)]
pub(crate) enum CrmWebhook {
    Disabled,
    Http(HttpWebhookDispatcher),
}

impl CrmWebhook {
    pub(crate) fn from_config(
        url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, WebhookError> {
        match url {
            Some(url) => Ok(Self::Http(HttpWebhookDispatcher::new(url, timeout)?)),
            None => Ok(Self::Disabled),
        }
    }
}

impl WebhookDispatcher for CrmWebhook {
    fn dispatch(&self, webhook: LeadWebhook) -> Result<(), WebhookError> {
        match self {
            CrmWebhook::Disabled => {
                debug!(lead_id = %webhook.lead_id.0, "lead webhook disabled; skipping");
                Ok(())
            }
            CrmWebhook::Http(dispatcher) => dispatcher.dispatch(webhook),
        }
    }
}
