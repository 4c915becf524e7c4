use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::categories::{Budget, MonthlyVolume, TeamSize, Timeline};
use super::roi::{RoiInputs, RoiResult};

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Website form a lead arrived through. Drives the base score and response copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Demo,
    RoiCalculator,
    Contact,
}

impl FormKind {
    pub const fn slug(self) -> &'static str {
        match self {
            FormKind::Demo => "demo",
            FormKind::RoiCalculator => "roi_calculator",
            FormKind::Contact => "contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "demo" => Some(Self::Demo),
            "roi" | "roi_calculator" => Some(Self::RoiCalculator),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

/// Languages the website serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
    Pt,
}

impl Locale {
    /// Accepts bare codes and regional tags such as `pt-BR` or `en_US`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let primary = normalized
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default();
        match primary {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

/// Raw form payload as posted by the website. Everything is validated before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub use_case: String,
    #[serde(default)]
    pub team_size: Option<TeamSize>,
    #[serde(default)]
    pub monthly_volume: Option<MonthlyVolume>,
    #[serde(default)]
    pub timeline: Option<Timeline>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub roi: Option<RoiSubmission>,
}

/// Calculator section of an ROI lead. `results` is what the browser computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiSubmission {
    pub inputs: RoiInputs,
    #[serde(default)]
    pub results: Option<RoiResult>,
}

/// Validated, normalized lead ready for scoring and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadProfile {
    pub form: FormKind,
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub role: String,
    pub use_case: String,
    pub team_size: Option<TeamSize>,
    pub monthly_volume: Option<MonthlyVolume>,
    pub timeline: Option<Timeline>,
    pub budget: Option<Budget>,
    pub challenges: Vec<String>,
    pub product: Option<String>,
    pub locale: Locale,
    pub message: Option<String>,
    pub roi: Option<RoiProjection>,
}

impl LeadProfile {
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}

/// Server-side ROI computation attached to an ROI calculator lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub inputs: RoiInputs,
    pub result: RoiResult,
}

/// Lifecycle marker at hand-off. Later stages are owned by the CRM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
        }
    }
}

/// Timestamped capture metadata stored alongside the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureMetadata {
    pub received_at: DateTime<Utc>,
    pub status: LeadStatus,
}
