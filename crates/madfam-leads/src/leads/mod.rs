//! Lead intake for the marketing site: validation, scoring, tagging, ROI projections, and the
//! HTTP surface that ties them to persistence and outbound hand-offs.

pub mod categories;
pub mod domain;
pub mod messages;
pub mod repository;
pub mod roi;
pub mod router;
pub mod scoring;
pub mod service;
pub mod tagging;
pub mod validation;

#[cfg(test)]
mod tests;

pub use categories::{Bucket, Budget, MonthlyVolume, TeamSize, Timeline};
pub use domain::{
    CaptureMetadata, FormKind, LeadId, LeadProfile, LeadStatus, LeadSubmission, Locale,
    RoiProjection, RoiSubmission,
};
pub use repository::{
    LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadStatusView, LeadWebhook,
    NotificationError, RepositoryError, WebhookDispatcher, WebhookError,
};
pub use roi::{RoiCalculator, RoiError, RoiInputs, RoiResult, ServiceTier};
pub use router::lead_router;
pub use scoring::{LeadScore, LeadScorer, ScoreComponent, ScoreFactor, ScoreOutcome, ScoreTier};
pub use service::{LeadCaptureService, LeadReceipt, LeadServiceError};
pub use tagging::{lead_tags, TagContext};
pub use validation::{FieldError, LeadValidator, ValidationErrors};
