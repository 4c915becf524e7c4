mod rules;

pub use rules::{is_freemail_domain, FREEMAIL_DOMAINS};

use super::domain::{FormKind, LeadProfile};
use serde::{Deserialize, Serialize};

/// Ceiling applied to every composite score.
pub const MAX_SCORE: u8 = 100;

/// Starting points before any qualification signal is counted.
pub const fn base_score(form: FormKind) -> u8 {
    match form {
        FormKind::Demo => 30,
        FormKind::RoiCalculator | FormKind::Contact => 25,
    }
}

/// Stateless scorer applying the weighted qualification rubric to a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadScorer;

impl LeadScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, profile: &LeadProfile) -> ScoreOutcome {
        let components = rules::score_profile(profile);
        let raw: u32 = components
            .iter()
            .map(|component| u32::from(component.points))
            .sum();
        let score = LeadScore::clamped(raw);

        ScoreOutcome { score, components }
    }
}

/// Lead score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadScore(u8);

impl LeadScore {
    pub fn clamped(raw: u32) -> Self {
        Self(raw.min(u32::from(MAX_SCORE)) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> ScoreTier {
        match self.0 {
            0..=39 => ScoreTier::Cold,
            40..=59 => ScoreTier::Warm,
            60..=79 => ScoreTier::Hot,
            _ => ScoreTier::Qualified,
        }
    }
}

/// Sales-readiness grade used for CRM routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Cold,
    Warm,
    Hot,
    Qualified,
}

impl ScoreTier {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreTier::Cold => "cold",
            ScoreTier::Warm => "warm",
            ScoreTier::Hot => "hot",
            ScoreTier::Qualified => "qualified",
        }
    }
}

/// Signal a score component was awarded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    BusinessEmail,
    Company,
    TeamSize,
    MonthlyVolume,
    Timeline,
    Budget,
    Challenges,
    RoiReturn,
    RoiSavings,
}

/// Discrete contribution to a score, kept for sales-ops audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// Composite score plus the trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: LeadScore,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    /// Sum before clamping; useful to see how far past the ceiling a lead landed.
    pub fn raw_total(&self) -> u32 {
        self.components
            .iter()
            .map(|component| u32::from(component.points))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_ceiling() {
        assert_eq!(LeadScore::clamped(135).value(), 100);
        assert_eq!(LeadScore::clamped(55).value(), 55);
    }

    #[test]
    fn tiers_follow_score_bands() {
        assert_eq!(LeadScore::clamped(25).tier(), ScoreTier::Cold);
        assert_eq!(LeadScore::clamped(40).tier(), ScoreTier::Warm);
        assert_eq!(LeadScore::clamped(79).tier(), ScoreTier::Hot);
        assert_eq!(LeadScore::clamped(100).tier(), ScoreTier::Qualified);
    }
}
