use super::super::categories::Bucket;
use super::super::domain::{FormKind, LeadProfile};
use super::{base_score, ScoreComponent, ScoreFactor};

const BUSINESS_EMAIL_POINTS: u8 = 15;
const COMPANY_POINTS: u8 = 10;
const CHALLENGES_POINTS: u8 = 10;
const CHALLENGES_THRESHOLD: usize = 2;

const ROI_STRONG_RETURN_PCT: f64 = 200.0;
const ROI_STRONG_RETURN_POINTS: u8 = 15;
const ROI_RETURN_PCT: f64 = 100.0;
const ROI_RETURN_POINTS: u8 = 10;
const ROI_SAVINGS_THRESHOLD: f64 = 10_000.0;
const ROI_SAVINGS_POINTS: u8 = 10;

pub const FREEMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "yahoo.com.mx",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "proton.me",
    "gmx.com",
    "mail.com",
    "yandex.com",
    "zoho.com",
];

pub fn is_freemail_domain(domain: &str) -> bool {
    let domain = domain.trim().to_ascii_lowercase();
    FREEMAIL_DOMAINS.iter().any(|free| *free == domain)
}

pub(crate) fn score_profile(profile: &LeadProfile) -> Vec<ScoreComponent> {
    let mut components = vec![ScoreComponent {
        factor: ScoreFactor::Base,
        points: base_score(profile.form),
        notes: format!("{} form", profile.form.slug()),
    }];

    let domain = profile.email_domain();
    if !domain.is_empty() && !is_freemail_domain(domain) {
        components.push(ScoreComponent {
            factor: ScoreFactor::BusinessEmail,
            points: BUSINESS_EMAIL_POINTS,
            notes: format!("business domain {domain}"),
        });
    }

    if profile.company.is_some() {
        components.push(ScoreComponent {
            factor: ScoreFactor::Company,
            points: COMPANY_POINTS,
            notes: "company provided".to_string(),
        });
    }

    push_bucket(&mut components, ScoreFactor::TeamSize, profile.team_size);
    push_bucket(
        &mut components,
        ScoreFactor::MonthlyVolume,
        profile.monthly_volume,
    );
    push_bucket(&mut components, ScoreFactor::Timeline, profile.timeline);
    push_bucket(&mut components, ScoreFactor::Budget, profile.budget);

    if profile.challenges.len() > CHALLENGES_THRESHOLD {
        components.push(ScoreComponent {
            factor: ScoreFactor::Challenges,
            points: CHALLENGES_POINTS,
            notes: format!("{} challenges selected", profile.challenges.len()),
        });
    }

    if profile.form == FormKind::RoiCalculator {
        if let Some(projection) = &profile.roi {
            let result = &projection.result;
            if result.roi_percentage >= ROI_STRONG_RETURN_PCT {
                components.push(ScoreComponent {
                    factor: ScoreFactor::RoiReturn,
                    points: ROI_STRONG_RETURN_POINTS,
                    notes: format!("projected ROI {:.0}%", result.roi_percentage),
                });
            } else if result.roi_percentage >= ROI_RETURN_PCT {
                components.push(ScoreComponent {
                    factor: ScoreFactor::RoiReturn,
                    points: ROI_RETURN_POINTS,
                    notes: format!("projected ROI {:.0}%", result.roi_percentage),
                });
            }

            if result.monthly_savings >= ROI_SAVINGS_THRESHOLD {
                components.push(ScoreComponent {
                    factor: ScoreFactor::RoiSavings,
                    points: ROI_SAVINGS_POINTS,
                    notes: format!("monthly savings {:.0}", result.monthly_savings),
                });
            }
        }
    }

    components
}

fn push_bucket<B: Bucket>(
    components: &mut Vec<ScoreComponent>,
    factor: ScoreFactor,
    bucket: Option<B>,
) {
    let Some(bucket) = bucket else {
        return;
    };
    let points = bucket.points();
    if points == 0 {
        return;
    }
    components.push(ScoreComponent {
        factor,
        points,
        notes: bucket.slug().to_string(),
    });
}
