use serde::{Deserialize, Serialize};

/// Share of process time or throughput recovered by automation.
pub const EFFICIENCY_GAIN: f64 = 0.35;
/// Share of current operating cost removed.
pub const COST_REDUCTION: f64 = 0.25;
/// Reference engagement cost the projection is measured against.
pub const INVESTMENT: f64 = 50_000.0;

/// Engagement tier the prospect is evaluating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    #[default]
    Essentials,
    Professional,
    Enterprise,
}

impl ServiceTier {
    pub const fn slug(self) -> &'static str {
        match self {
            ServiceTier::Essentials => "essentials",
            ServiceTier::Professional => "professional",
            ServiceTier::Enterprise => "enterprise",
        }
    }
}

/// Business inputs collected by the calculator widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    pub current_costs: f64,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub employee_hours: Option<f64>,
    #[serde(default)]
    pub projects_per_month: Option<f64>,
    #[serde(default)]
    pub average_project_value: Option<f64>,
    #[serde(default)]
    pub additional_revenue: Option<f64>,
    #[serde(default)]
    pub service_tier: ServiceTier,
}

/// Derived monthly and annual projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub monthly_savings: f64,
    pub time_saved_hours: f64,
    pub additional_revenue: f64,
    pub total_monthly_benefit: f64,
    pub annual_benefit: f64,
    pub roi_percentage: f64,
    /// `None` when the projection yields no monthly benefit, i.e. the investment never pays back.
    pub payback_months: Option<f64>,
}

impl RoiResult {
    /// True when another result agrees on every metric within `tolerance` (absolute).
    pub fn agrees_with(&self, other: &RoiResult, tolerance: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= tolerance;
        close(self.monthly_savings, other.monthly_savings)
            && close(self.annual_benefit, other.annual_benefit)
            && close(self.roi_percentage, other.roi_percentage)
            && match (self.payback_months, other.payback_months) {
                (Some(a), Some(b)) => close(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoiError {
    #[error("{field} must be a finite, non-negative number")]
    InvalidInput { field: &'static str },
    #[error("inputs are too large to project: {metric} is not finite")]
    Overflow { metric: &'static str },
}

impl RoiInputs {
    /// Reject negative, NaN, and infinite values before any arithmetic runs.
    pub fn check(&self) -> Result<(), RoiError> {
        let fields: [(&'static str, Option<f64>); 5] = [
            ("currentCosts", Some(self.current_costs)),
            ("employeeHours", self.employee_hours),
            ("projectsPerMonth", self.projects_per_month),
            ("averageProjectValue", self.average_project_value),
            ("additionalRevenue", self.additional_revenue),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(RoiError::InvalidInput { field });
                }
            }
        }

        Ok(())
    }
}

/// Fixed-constant ROI projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiCalculator;

impl RoiCalculator {
    pub fn calculate(&self, inputs: &RoiInputs) -> Result<RoiResult, RoiError> {
        inputs.check()?;

        let monthly_savings = inputs.current_costs * COST_REDUCTION;

        let headcount = inputs.employee_count.map(f64::from).unwrap_or(1.0);
        let time_saved_hours = inputs.employee_hours.unwrap_or(0.0) * EFFICIENCY_GAIN * headcount;

        let additional_revenue = inputs.additional_revenue.unwrap_or_else(|| {
            inputs.projects_per_month.unwrap_or(0.0)
                * EFFICIENCY_GAIN
                * inputs.average_project_value.unwrap_or(0.0)
        });

        let total_monthly_benefit = monthly_savings + additional_revenue / 12.0;
        let annual_benefit = total_monthly_benefit * 12.0;
        let roi_percentage = (annual_benefit - INVESTMENT) / INVESTMENT * 100.0;
        let payback_months = if total_monthly_benefit > 0.0 {
            Some(INVESTMENT / total_monthly_benefit)
        } else {
            None
        };

        let derived = [
            ("timeSavedHours", time_saved_hours),
            ("additionalRevenue", additional_revenue),
            ("totalMonthlyBenefit", total_monthly_benefit),
            ("annualBenefit", annual_benefit),
            ("roiPercentage", roi_percentage),
        ];
        if let Some((metric, _)) = derived.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RoiError::Overflow { metric: *metric });
        }

        Ok(RoiResult {
            monthly_savings,
            time_saved_hours,
            additional_revenue,
            total_monthly_benefit,
            annual_benefit,
            roi_percentage,
            payback_months,
        })
    }
}
