use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{CaptureMetadata, FormKind, LeadId, LeadStatus, LeadSubmission, Locale};
use super::messages::{confirmation_subject, success_message};
use super::repository::{
    LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadWebhook, NotificationError,
    RepositoryError, WebhookDispatcher,
};
use super::roi::{RoiCalculator, RoiError, RoiInputs, RoiResult};
use super::scoring::{LeadScorer, ScoreTier};
use super::tagging::{lead_tags, TagContext};
use super::validation::{LeadValidator, ValidationErrors};

/// Absolute tolerance when comparing browser-computed ROI figures with ours.
const ROI_AGREEMENT_TOLERANCE: f64 = 0.01;

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

/// What the website gets back after a lead is captured.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceipt {
    pub lead_id: LeadId,
    pub score: u8,
    pub tier: ScoreTier,
    pub tags: Vec<String>,
    pub locale: Locale,
    pub message: &'static str,
}

/// Composes validation, scoring, tagging, persistence, and outbound hand-offs.
pub struct LeadCaptureService<R, N, W> {
    validator: LeadValidator,
    scorer: LeadScorer,
    calculator: RoiCalculator,
    repository: Arc<R>,
    notifier: Arc<N>,
    webhook: Arc<W>,
    default_locale: Locale,
}

impl<R, N, W> LeadCaptureService<R, N, W>
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, webhook: Arc<W>) -> Self {
        Self {
            validator: LeadValidator::new(),
            scorer: LeadScorer::new(),
            calculator: RoiCalculator,
            repository,
            notifier,
            webhook,
            default_locale: Locale::default(),
        }
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Validate, score, persist, and hand off a new lead.
    ///
    /// Persistence and the notification queue are awaited in order and their failures are
    /// returned. The CRM webhook is best-effort: a failure is logged and the lead still counts
    /// as captured.
    pub fn submit(
        &self,
        form: FormKind,
        submission: LeadSubmission,
    ) -> Result<LeadReceipt, LeadServiceError> {
        let client_roi = submission
            .roi
            .as_ref()
            .and_then(|roi| roi.results.clone());

        let profile =
            self.validator
                .profile_from_submission(form, submission, self.default_locale)?;

        if let (Some(claimed), Some(projection)) = (client_roi, profile.roi.as_ref()) {
            if !projection
                .result
                .agrees_with(&claimed, ROI_AGREEMENT_TOLERANCE)
            {
                warn!(
                    claimed_roi = claimed.roi_percentage,
                    computed_roi = projection.result.roi_percentage,
                    "client ROI figures disagree with server projection; using server values"
                );
            }
        }

        let outcome = self.scorer.score(&profile);
        let tags = lead_tags(TagContext {
            form,
            product: profile.product.as_deref(),
            use_case: &profile.use_case,
            service_tier: profile
                .roi
                .as_ref()
                .map(|projection| projection.inputs.service_tier),
            score_tier: Some(outcome.score.tier()),
        });

        let record = LeadRecord {
            lead_id: next_lead_id(),
            profile,
            score: outcome.score,
            components: outcome.components,
            tags,
            metadata: CaptureMetadata {
                received_at: Utc::now(),
                status: LeadStatus::New,
            },
        };

        let stored = self.repository.insert(record)?;

        info!(
            lead_id = %stored.lead_id.0,
            form = form.slug(),
            score = stored.score.value(),
            tier = stored.score.tier().label(),
            "lead captured"
        );

        let locale = stored.profile.locale;
        self.notifier.enqueue(LeadNotification {
            lead_id: stored.lead_id.clone(),
            to: stored.profile.email.clone(),
            name: stored.profile.name.clone(),
            locale,
            template: format!("{}_confirmation", form.slug()),
            subject: confirmation_subject(form, locale).to_string(),
        })?;

        if let Err(error) = self.webhook.dispatch(LeadWebhook::captured(&stored)) {
            warn!(lead_id = %stored.lead_id.0, %error, "lead webhook dispatch failed");
        }

        Ok(LeadReceipt {
            lead_id: stored.lead_id.clone(),
            score: stored.score.value(),
            tier: stored.score.tier(),
            tags: stored.tags,
            locale,
            message: success_message(form, locale),
        })
    }

    /// Pure ROI projection for the calculator widget; nothing is stored.
    pub fn calculate_roi(&self, inputs: &RoiInputs) -> Result<RoiResult, RoiError> {
        self.calculator.calculate(inputs)
    }

    /// Fetch a stored lead for status lookups.
    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the lead capture service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
