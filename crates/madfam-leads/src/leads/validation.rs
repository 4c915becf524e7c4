use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::domain::{FormKind, LeadProfile, LeadSubmission, Locale, RoiProjection};
use super::roi::{RoiCalculator, RoiError};

const MAX_SHORT_TEXT: usize = 200;
const MAX_MESSAGE: usize = 5_000;
const MAX_CHALLENGES: usize = 20;

/// Single field-level problem reported back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every problem found in a submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, thiserror::Error)]
#[error("validation failed for: {}", field_names(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

fn field_names(errors: &[FieldError]) -> String {
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    fields.join(", ")
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

pub fn is_valid_email(candidate: &str) -> bool {
    candidate.len() <= 254 && email_pattern().is_match(candidate)
}

/// Turns raw submissions into normalized profiles, or explains why it cannot.
#[derive(Debug, Clone, Default)]
pub struct LeadValidator {
    calculator: RoiCalculator,
}

impl LeadValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_from_submission(
        &self,
        form: FormKind,
        submission: LeadSubmission,
        default_locale: Locale,
    ) -> Result<LeadProfile, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let email = submission.email.trim().to_lowercase();
        if email.is_empty() {
            errors.push("email", "email is required");
        } else if !is_valid_email(&email) {
            errors.push("email", "email address is invalid");
        }

        let name = optional_text(&mut errors, "name", submission.name);
        let company = optional_text(&mut errors, "company", submission.company);
        let role = required_text(&mut errors, "role", submission.role);
        let use_case = required_text(&mut errors, "useCase", submission.use_case);
        let product = optional_text(&mut errors, "product", submission.product)
            .map(|product| product.to_lowercase());

        let message = submission
            .message
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());
        if message
            .as_ref()
            .is_some_and(|message| message.chars().count() > MAX_MESSAGE)
        {
            errors.push(
                "message",
                format!("message must be at most {MAX_MESSAGE} characters"),
            );
        }

        let challenges: Vec<String> = submission
            .challenges
            .into_iter()
            .map(|challenge| challenge.trim().to_string())
            .filter(|challenge| !challenge.is_empty())
            .collect();
        if challenges.len() > MAX_CHALLENGES {
            errors.push(
                "challenges",
                format!("select at most {MAX_CHALLENGES} challenges"),
            );
        }

        let locale = submission
            .preferred_language
            .as_deref()
            .and_then(Locale::parse)
            .unwrap_or(default_locale);

        let roi = match (form, submission.roi) {
            (FormKind::RoiCalculator, None) => {
                errors.push("roi", "calculator inputs are required");
                None
            }
            (_, Some(roi)) => match self.calculator.calculate(&roi.inputs) {
                Ok(result) => Some(RoiProjection {
                    inputs: roi.inputs,
                    result,
                }),
                Err(RoiError::InvalidInput { field }) => {
                    errors.push(
                        format!("roi.inputs.{field}"),
                        "must be a finite, non-negative number",
                    );
                    None
                }
                Err(overflow @ RoiError::Overflow { .. }) => {
                    errors.push("roi.inputs", overflow.to_string());
                    None
                }
            },
            (_, None) => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LeadProfile {
            form,
            email,
            name,
            company,
            role: role.unwrap_or_default(),
            use_case: use_case.unwrap_or_default(),
            team_size: submission.team_size,
            monthly_volume: submission.monthly_volume,
            timeline: submission.timeline,
            budget: submission.budget,
            challenges,
            product,
            locale,
            message,
            roi,
        })
    }
}

fn required_text(errors: &mut ValidationErrors, field: &str, value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{field} is required"));
        return None;
    }
    bounded(errors, field, trimmed)
}

fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    bounded(errors, field, trimmed)
}

fn bounded(errors: &mut ValidationErrors, field: &str, trimmed: &str) -> Option<String> {
    if trimmed.chars().count() > MAX_SHORT_TEXT {
        errors.push(
            field,
            format!("{field} must be at most {MAX_SHORT_TEXT} characters"),
        );
        return None;
    }
    Some(trimmed.to_string())
}
