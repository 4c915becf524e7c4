use super::common::*;
use crate::leads::categories::{Budget, MonthlyVolume, TeamSize, Timeline};
use crate::leads::domain::{FormKind, LeadSubmission};
use crate::leads::scoring::{base_score, LeadScorer, ScoreFactor, ScoreTier};

#[test]
fn required_fields_only_score_the_form_base() {
    let scorer = LeadScorer::new();

    for form in [FormKind::Demo, FormKind::Contact] {
        let outcome = scorer.score(&profile(form, minimal_submission()));
        assert_eq!(outcome.score.value(), base_score(form));
        assert_eq!(outcome.components.len(), 1);
        assert_eq!(outcome.components[0].factor, ScoreFactor::Base);
    }

    assert_eq!(base_score(FormKind::Demo), 30);
    assert_eq!(base_score(FormKind::Contact), 25);
    assert_eq!(base_score(FormKind::RoiCalculator), 25);
}

#[test]
fn enterprise_signals_clamp_to_one_hundred() {
    let outcome = LeadScorer::new().score(&profile(FormKind::Demo, enterprise_submission()));

    assert!(outcome.raw_total() > 100);
    assert_eq!(outcome.score.value(), 100);
    assert_eq!(outcome.score.tier(), ScoreTier::Qualified);
}

#[test]
fn business_domain_and_company_add_bonuses() {
    let submission = LeadSubmission {
        email: "ops@acme-logistics.com".to_string(),
        company: Some("ACME Logistics".to_string()),
        ..minimal_submission()
    };

    let outcome = LeadScorer::new().score(&profile(FormKind::Contact, submission));

    assert_eq!(outcome.score.value(), 25 + 15 + 10);
    assert!(outcome
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::BusinessEmail
            && component.notes.contains("acme-logistics.com")));
}

#[test]
fn freemail_domains_earn_no_domain_bonus() {
    let submission = LeadSubmission {
        email: "someone@Outlook.com".to_string(),
        ..minimal_submission()
    };

    let outcome = LeadScorer::new().score(&profile(FormKind::Contact, submission));

    assert!(!outcome
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::BusinessEmail));
}

#[test]
fn bucket_weights_match_rubric() {
    let submission = LeadSubmission {
        team_size: Some(TeamSize::Large),
        monthly_volume: Some(MonthlyVolume::Low),
        timeline: Some(Timeline::Quarter),
        budget: Some(Budget::Starter),
        ..minimal_submission()
    };

    let outcome = LeadScorer::new().score(&profile(FormKind::Contact, submission));

    assert_eq!(outcome.score.value(), 25 + 15 + 5 + 10 + 5);
}

#[test]
fn zero_weight_buckets_leave_no_component() {
    let submission = LeadSubmission {
        team_size: Some(TeamSize::Small),
        timeline: Some(Timeline::Exploring),
        budget: Some(Budget::Undisclosed),
        ..minimal_submission()
    };

    let outcome = LeadScorer::new().score(&profile(FormKind::Demo, submission));

    assert_eq!(outcome.components.len(), 1);
    assert_eq!(outcome.score.value(), 30);
}

#[test]
fn more_than_two_challenges_earn_bonus() {
    let two = LeadSubmission {
        challenges: vec!["manual data entry".to_string(), "reporting".to_string()],
        ..minimal_submission()
    };
    let three = LeadSubmission {
        challenges: vec![
            "manual data entry".to_string(),
            "reporting".to_string(),
            "compliance".to_string(),
        ],
        ..minimal_submission()
    };

    let scorer = LeadScorer::new();
    assert_eq!(scorer.score(&profile(FormKind::Contact, two)).score.value(), 25);
    assert_eq!(scorer.score(&profile(FormKind::Contact, three)).score.value(), 35);
}

#[test]
fn roi_leads_earn_return_and_savings_bonuses() {
    let outcome = LeadScorer::new().score(&profile(FormKind::RoiCalculator, roi_submission()));

    // 270% projected return and 12,500 monthly savings.
    assert_eq!(outcome.score.value(), 25 + 15 + 10);
    assert!(outcome
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::RoiReturn && component.points == 15));
}

#[test]
fn roi_figures_are_ignored_on_other_forms() {
    let outcome = LeadScorer::new().score(&profile(FormKind::Contact, roi_submission()));

    assert_eq!(outcome.score.value(), 25);
}

#[test]
fn role_title_carries_no_weight() {
    let scorer = LeadScorer::new();

    for role in ["CEO", "Co-Founder & CTO", "Directora de Operaciones", "Intern"] {
        let submission = LeadSubmission {
            role: role.to_string(),
            ..minimal_submission()
        };
        let outcome = scorer.score(&profile(FormKind::Demo, submission));
        assert_eq!(outcome.score.value(), 30, "role {role}");
    }
}

#[test]
fn scoring_is_deterministic() {
    let scorer = LeadScorer::new();
    let lead = profile(FormKind::Demo, enterprise_submission());

    assert_eq!(scorer.score(&lead), scorer.score(&lead));
}
