use clap::Args;
use madfam_leads::error::AppError;
use madfam_leads::leads::{
    lead_tags, Budget, FormKind, LeadScorer, LeadSubmission, LeadValidator, Locale,
    RoiCalculator, RoiInputs, RoiResult, RoiSubmission, ScoreOutcome, ServiceTier, TagContext,
    TeamSize, Timeline,
};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON lead submission (same shape the website posts)
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Form the submission came from: demo, contact, or roi
    #[arg(long, default_value = "demo", value_parser = parse_form)]
    pub(crate) form: FormKind,
    /// Print the full score breakdown as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RoiArgs {
    /// Current monthly operating cost
    #[arg(long)]
    pub(crate) current_costs: f64,
    /// Number of employees doing the work
    #[arg(long)]
    pub(crate) employee_count: Option<u32>,
    /// Monthly hours spent per employee
    #[arg(long)]
    pub(crate) employee_hours: Option<f64>,
    /// Projects delivered per month
    #[arg(long)]
    pub(crate) projects_per_month: Option<f64>,
    /// Average revenue per project
    #[arg(long)]
    pub(crate) average_project_value: Option<f64>,
    /// Known additional annual revenue (overrides the project estimate)
    #[arg(long)]
    pub(crate) additional_revenue: Option<f64>,
    /// Service tier: essentials, professional, or enterprise
    #[arg(long, default_value = "essentials", value_parser = parse_tier)]
    pub(crate) tier: ServiceTier,
}

fn parse_form(raw: &str) -> Result<FormKind, String> {
    FormKind::parse(raw).ok_or_else(|| format!("unknown form '{raw}' (expected demo, contact, roi)"))
}

fn parse_tier(raw: &str) -> Result<ServiceTier, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "essentials" => Ok(ServiceTier::Essentials),
        "professional" => Ok(ServiceTier::Professional),
        "enterprise" => Ok(ServiceTier::Enterprise),
        _ => Err(format!(
            "unknown tier '{raw}' (expected essentials, professional, enterprise)"
        )),
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { file, form, json } = args;

    let raw = fs::read_to_string(&file)?;
    let submission: LeadSubmission = serde_json::from_str(&raw)?;
    let (outcome, tags) = score_submission(form, submission)?;

    if json {
        let payload = serde_json::json!({
            "form": form,
            "score": outcome.score,
            "tier": outcome.score.tier(),
            "components": outcome.components,
            "tags": tags,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_score(&file.display().to_string(), &outcome, &tags);
    }

    Ok(())
}

pub(crate) fn run_roi(args: RoiArgs) -> Result<(), AppError> {
    let inputs = RoiInputs {
        current_costs: args.current_costs,
        employee_count: args.employee_count,
        employee_hours: args.employee_hours,
        projects_per_month: args.projects_per_month,
        average_project_value: args.average_project_value,
        additional_revenue: args.additional_revenue,
        service_tier: args.tier,
    };

    let result = RoiCalculator.calculate(&inputs)?;
    render_roi(&result);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Lead scoring demo");

    for (label, form, submission) in sample_leads() {
        let (outcome, tags) = score_submission(form, submission)?;
        render_score(label, &outcome, &tags);
    }

    Ok(())
}

fn score_submission(
    form: FormKind,
    submission: LeadSubmission,
) -> Result<(ScoreOutcome, Vec<String>), AppError> {
    let profile = LeadValidator::new().profile_from_submission(form, submission, Locale::default())?;
    let outcome = LeadScorer::new().score(&profile);
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
    Ok((outcome, tags))
}

fn sample_leads() -> Vec<(&'static str, FormKind, LeadSubmission)> {
    vec![
        (
            "Newsletter visitor",
            FormKind::Contact,
            LeadSubmission {
                email: "curioso@gmail.com".to_string(),
                role: "Student".to_string(),
                use_case: "Learning about automation".to_string(),
                ..LeadSubmission::default()
            },
        ),
        (
            "Mid-market operations lead",
            FormKind::Demo,
            LeadSubmission {
                email: "ops@logistica-norte.mx".to_string(),
                company: Some("Logística Norte".to_string()),
                role: "Operations Manager".to_string(),
                use_case: "Route planning".to_string(),
                team_size: Some(TeamSize::Large),
                timeline: Some(Timeline::Quarter),
                ..LeadSubmission::default()
            },
        ),
        (
            "Enterprise CTO",
            FormKind::Demo,
            LeadSubmission {
                email: "cto@grupo-industrial.com".to_string(),
                company: Some("Grupo Industrial".to_string()),
                role: "CTO".to_string(),
                use_case: "Plant analytics".to_string(),
                team_size: Some(TeamSize::Enterprise),
                timeline: Some(Timeline::Immediate),
                budget: Some(Budget::Enterprise),
                product: Some("platform".to_string()),
                ..LeadSubmission::default()
            },
        ),
        (
            "ROI calculator prospect",
            FormKind::RoiCalculator,
            LeadSubmission {
                email: "finanzas@constructora-sol.com.mx".to_string(),
                role: "Controller".to_string(),
                use_case: "Project cost control".to_string(),
                roi: Some(RoiSubmission {
                    inputs: RoiInputs {
                        current_costs: 50_000.0,
                        employee_hours: Some(160.0),
                        projects_per_month: Some(5.0),
                        average_project_value: Some(20_000.0),
                        service_tier: ServiceTier::Professional,
                        ..RoiInputs::default()
                    },
                    results: None,
                }),
                ..LeadSubmission::default()
            },
        ),
    ]
}

fn render_score(label: &str, outcome: &ScoreOutcome, tags: &[String]) {
    println!(
        "\n{}: score {} ({})",
        label,
        outcome.score.value(),
        outcome.score.tier().label()
    );
    for component in &outcome.components {
        println!("  +{:>2} {:?}: {}", component.points, component.factor, component.notes);
    }
    if outcome.raw_total() > u32::from(outcome.score.value()) {
        println!("  (raw total {} capped at 100)", outcome.raw_total());
    }
    println!("  tags: {}", tags.join(", "));
}

fn render_roi(result: &RoiResult) {
    println!("ROI projection");
    println!("- Monthly savings: {:.2}", result.monthly_savings);
    println!("- Hours saved per month: {:.1}", result.time_saved_hours);
    println!("- Additional revenue: {:.2}", result.additional_revenue);
    println!("- Total monthly benefit: {:.2}", result.total_monthly_benefit);
    println!("- Annual benefit: {:.2}", result.annual_benefit);
    println!("- ROI: {:.1}%", result.roi_percentage);
    match result.payback_months {
        Some(months) => println!("- Payback period: {:.1} months", months),
        None => println!("- Payback period: never (no projected benefit)"),
    }
}
