use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::leads::domain::{FormKind, LeadId, LeadProfile, LeadSubmission, Locale, RoiSubmission};
use crate::leads::repository::{
    LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadWebhook, NotificationError,
    RepositoryError, WebhookDispatcher, WebhookError,
};
use crate::leads::roi::{RoiInputs, ServiceTier};
use crate::leads::validation::LeadValidator;
use crate::leads::{lead_router, LeadCaptureService};

pub(super) type MemoryService = LeadCaptureService<MemoryRepository, MemoryNotifier, MemoryWebhook>;

/// Only the fields the website marks as required; free-mail address so no domain bonus.
pub(super) fn minimal_submission() -> LeadSubmission {
    LeadSubmission {
        email: "visitor@gmail.com".to_string(),
        role: "Operations Manager".to_string(),
        use_case: "Invoice automation".to_string(),
        ..LeadSubmission::default()
    }
}

pub(super) fn enterprise_submission() -> LeadSubmission {
    LeadSubmission {
        email: "Ana.Torres@Grupo-Industrial.mx".to_string(),
        name: Some("Ana Torres".to_string()),
        company: Some("Grupo Industrial del Norte".to_string()),
        role: "CTO".to_string(),
        use_case: "Supply chain visibility".to_string(),
        team_size: Some("enterprise".to_string().into()),
        timeline: Some("immediate".to_string().into()),
        budget: Some("enterprise".to_string().into()),
        product: Some("platform".to_string()),
        preferred_language: Some("en".to_string()),
        ..LeadSubmission::default()
    }
}

pub(super) fn reference_roi_inputs() -> RoiInputs {
    RoiInputs {
        current_costs: 50_000.0,
        employee_hours: Some(160.0),
        projects_per_month: Some(5.0),
        average_project_value: Some(20_000.0),
        service_tier: ServiceTier::Professional,
        ..RoiInputs::default()
    }
}

pub(super) fn roi_submission() -> LeadSubmission {
    LeadSubmission {
        roi: Some(RoiSubmission {
            inputs: reference_roi_inputs(),
            results: None,
        }),
        ..minimal_submission()
    }
}

pub(super) fn profile(form: FormKind, submission: LeadSubmission) -> LeadProfile {
    LeadValidator::new()
        .profile_from_submission(form, submission, Locale::Es)
        .expect("fixture submission is valid")
}

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
    Arc<MemoryWebhook>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let webhook = Arc::new(MemoryWebhook::default());
    let service = LeadCaptureService::new(repository.clone(), notifier.clone(), webhook.clone());
    (service, repository, notifier, webhook)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    lead_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.lead_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    queued: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn queued(&self) -> Vec<LeadNotification> {
        self.queued.lock().expect("notifier mutex poisoned").clone()
    }
}

impl LeadNotifier for MemoryNotifier {
    fn enqueue(&self, notification: LeadNotification) -> Result<(), NotificationError> {
        self.queued
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryWebhook {
    sent: Arc<Mutex<Vec<LeadWebhook>>>,
}

impl MemoryWebhook {
    pub(super) fn sent(&self) -> Vec<LeadWebhook> {
        self.sent.lock().expect("webhook mutex poisoned").clone()
    }
}

impl WebhookDispatcher for MemoryWebhook {
    fn dispatch(&self, webhook: LeadWebhook) -> Result<(), WebhookError> {
        self.sent.lock().expect("webhook mutex poisoned").push(webhook);
        Ok(())
    }
}

pub(super) struct FailingWebhook;

impl WebhookDispatcher for FailingWebhook {
    fn dispatch(&self, _webhook: LeadWebhook) -> Result<(), WebhookError> {
        Err(WebhookError::Transport("connection refused".to_string()))
    }
}

pub(super) struct OfflineQueue;

impl LeadNotifier for OfflineQueue {
    fn enqueue(&self, _notification: LeadNotification) -> Result<(), NotificationError> {
        Err(NotificationError::Queue("smtp relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
