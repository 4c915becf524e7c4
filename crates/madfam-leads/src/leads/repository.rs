use serde::{Deserialize, Serialize};

use super::domain::{CaptureMetadata, FormKind, LeadId, LeadProfile, Locale};
use super::scoring::{LeadScore, ScoreComponent, ScoreTier};

/// Repository record containing the profile, score trail, and capture metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub lead_id: LeadId,
    pub profile: LeadProfile,
    pub score: LeadScore,
    pub components: Vec<ScoreComponent>,
    pub tags: Vec<String>,
    pub metadata: CaptureMetadata,
}

impl LeadRecord {
    pub fn status_view(&self) -> LeadStatusView {
        LeadStatusView {
            lead_id: self.lead_id.clone(),
            form: self.profile.form,
            status: self.metadata.status.label(),
            score: self.score.value(),
            tier: self.score.tier(),
            tags: self.tags.clone(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound confirmation e-mail request handed to the mail queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadNotification {
    pub lead_id: LeadId,
    pub to: String,
    pub name: Option<String>,
    pub locale: Locale,
    pub template: String,
    pub subject: String,
}

/// Mail queue seam. Templating and delivery live behind it.
pub trait LeadNotifier: Send + Sync {
    fn enqueue(&self, notification: LeadNotification) -> Result<(), NotificationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification queue unavailable: {0}")]
    Queue(String),
}

/// CRM webhook payload. Carries no free-text message body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadWebhook {
    pub event: String,
    pub lead_id: LeadId,
    pub form: FormKind,
    pub email: String,
    pub company: Option<String>,
    pub score: u8,
    pub tier: ScoreTier,
    pub tags: Vec<String>,
    pub locale: Locale,
}

impl LeadWebhook {
    pub fn captured(record: &LeadRecord) -> Self {
        Self {
            event: "lead.captured".to_string(),
            lead_id: record.lead_id.clone(),
            form: record.profile.form,
            email: record.profile.email.clone(),
            company: record.profile.company.clone(),
            score: record.score.value(),
            tier: record.score.tier(),
            tags: record.tags.clone(),
            locale: record.profile.locale,
        }
    }
}

/// Best-effort outbound hook. Callers log failures and move on.
pub trait WebhookDispatcher: Send + Sync {
    fn dispatch(&self, webhook: LeadWebhook) -> Result<(), WebhookError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a stored lead for status lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStatusView {
    pub lead_id: LeadId,
    pub form: FormKind,
    pub status: &'static str,
    pub score: u8,
    pub tier: ScoreTier,
    pub tags: Vec<String>,
}
