//! Categorical buckets for the qualification fields of a lead form.
//!
//! The website now posts explicit slugs (`"enterprise"`, `"quarter"`, ...). Older embeds still
//! send the free-text option labels, so anything that is not a known slug is classified with
//! case-insensitive keyword rules. Rules are evaluated top to bottom and the first hit wins, which
//! keeps a label like `"51-200"` in the `large` bucket even though it also contains `"50"`.

use serde::{Deserialize, Serialize};

/// Shared behavior for qualification buckets.
pub trait Bucket: Copy + Sized + 'static {
    /// Ordered `(keywords, bucket)` rules applied to free text.
    const RULES: &'static [(&'static [&'static str], Self)];
    /// Bucket used when no rule matches.
    const FALLBACK: Self;
    /// Every variant, used for slug lookup.
    const ALL: &'static [Self];

    fn slug(self) -> &'static str;
    fn points(self) -> u8;

    fn classify(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if let Some(exact) = Self::ALL
            .iter()
            .copied()
            .find(|bucket| bucket.slug() == normalized)
        {
            return exact;
        }

        Self::RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| normalized.contains(keyword)))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(Self::FALLBACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TeamSize {
    Enterprise,
    Large,
    Medium,
    Small,
}

impl Bucket for TeamSize {
    const RULES: &'static [(&'static [&'static str], Self)] = &[
        (&["500", "1000", "enterprise"], TeamSize::Enterprise),
        (&["200", "100"], TeamSize::Large),
        (&["50"], TeamSize::Medium),
    ];
    const FALLBACK: Self = TeamSize::Small;
    const ALL: &'static [Self] = &[
        TeamSize::Enterprise,
        TeamSize::Large,
        TeamSize::Medium,
        TeamSize::Small,
    ];

    fn slug(self) -> &'static str {
        match self {
            TeamSize::Enterprise => "enterprise",
            TeamSize::Large => "large",
            TeamSize::Medium => "medium",
            TeamSize::Small => "small",
        }
    }

    fn points(self) -> u8 {
        match self {
            TeamSize::Enterprise => 20,
            TeamSize::Large => 15,
            TeamSize::Medium => 10,
            TeamSize::Small => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MonthlyVolume {
    High,
    Medium,
    Low,
    Minimal,
}

impl Bucket for MonthlyVolume {
    const RULES: &'static [(&'static [&'static str], Self)] = &[
        (&["10000", "enterprise", "high"], MonthlyVolume::High),
        (&["1000", "medium"], MonthlyVolume::Medium),
        (&["100", "low"], MonthlyVolume::Low),
    ];
    const FALLBACK: Self = MonthlyVolume::Minimal;
    const ALL: &'static [Self] = &[
        MonthlyVolume::High,
        MonthlyVolume::Medium,
        MonthlyVolume::Low,
        MonthlyVolume::Minimal,
    ];

    fn slug(self) -> &'static str {
        match self {
            MonthlyVolume::High => "high",
            MonthlyVolume::Medium => "medium",
            MonthlyVolume::Low => "low",
            MonthlyVolume::Minimal => "minimal",
        }
    }

    fn points(self) -> u8 {
        match self {
            MonthlyVolume::High => 15,
            MonthlyVolume::Medium => 10,
            MonthlyVolume::Low => 5,
            MonthlyVolume::Minimal => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Timeline {
    Immediate,
    Quarter,
    Exploring,
}

impl Bucket for Timeline {
    const RULES: &'static [(&'static [&'static str], Self)] = &[
        (&["immediate", "asap", "1 month"], Timeline::Immediate),
        (&["quarter", "3 month"], Timeline::Quarter),
    ];
    const FALLBACK: Self = Timeline::Exploring;
    const ALL: &'static [Self] = &[Timeline::Immediate, Timeline::Quarter, Timeline::Exploring];

    fn slug(self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::Quarter => "quarter",
            Timeline::Exploring => "exploring",
        }
    }

    fn points(self) -> u8 {
        match self {
            Timeline::Immediate => 15,
            Timeline::Quarter => 10,
            Timeline::Exploring => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Budget {
    Enterprise,
    Growth,
    Starter,
    Undisclosed,
}

impl Bucket for Budget {
    const RULES: &'static [(&'static [&'static str], Self)] = &[
        (&["100k", "enterprise"], Budget::Enterprise),
        (&["50k", "growth"], Budget::Growth),
        (&["10k", "starter"], Budget::Starter),
    ];
    const FALLBACK: Self = Budget::Undisclosed;
    const ALL: &'static [Self] = &[
        Budget::Enterprise,
        Budget::Growth,
        Budget::Starter,
        Budget::Undisclosed,
    ];

    fn slug(self) -> &'static str {
        match self {
            Budget::Enterprise => "enterprise",
            Budget::Growth => "growth",
            Budget::Starter => "starter",
            Budget::Undisclosed => "undisclosed",
        }
    }

    fn points(self) -> u8 {
        match self {
            Budget::Enterprise => 20,
            Budget::Growth => 15,
            Budget::Starter => 5,
            Budget::Undisclosed => 0,
        }
    }
}

impl From<String> for TeamSize {
    fn from(value: String) -> Self {
        Self::classify(&value)
    }
}

impl From<String> for MonthlyVolume {
    fn from(value: String) -> Self {
        Self::classify(&value)
    }
}

impl From<String> for Timeline {
    fn from(value: String) -> Self {
        Self::classify(&value)
    }
}

impl From<String> for Budget {
    fn from(value: String) -> Self {
        Self::classify(&value)
    }
}
