use super::domain::FormKind;
use super::roi::ServiceTier;
use super::scoring::ScoreTier;

/// Product-specific CRM tags. Unknown products contribute nothing.
fn product_tags(product: &str) -> &'static [&'static str] {
    match product {
        "ai-consulting" => &["product:ai-consulting", "segment:advisory"],
        "automation" => &["product:automation", "segment:operations"],
        "platform" => &["product:platform", "segment:saas"],
        "training" => &["product:training", "segment:enablement"],
        _ => &[],
    }
}

/// Lower-cases and collapses runs of anything non-alphanumeric into a single `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Inputs the tagger reads; borrowed from a profile at the call site.
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    pub form: FormKind,
    pub product: Option<&'a str>,
    pub use_case: &'a str,
    pub service_tier: Option<ServiceTier>,
    pub score_tier: Option<ScoreTier>,
}

/// Ordered, de-duplicated tag list for downstream CRM segmentation.
pub fn lead_tags(context: TagContext<'_>) -> Vec<String> {
    let mut tags = vec!["website-lead".to_string(), format!("form:{}", context.form.slug())];

    if let Some(product) = context.product {
        tags.extend(product_tags(product).iter().map(|tag| tag.to_string()));
    }

    if let Some(tier) = context.service_tier {
        tags.push(format!("tier:{}", tier.slug()));
    }

    let use_case = slugify(context.use_case);
    if !use_case.is_empty() {
        tags.push(format!("usecase:{use_case}"));
    }

    if let Some(score_tier) = context.score_tier {
        tags.push(format!("score:{}", score_tier.label()));
    }

    let mut seen = std::collections::HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));
    tags
}
