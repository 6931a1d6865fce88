//! View logic for the catalog side of the page: category groups, company
//! filters, similarity badges and connection-system parts.

use shared_types::{
    CategoryGroups, Company, ConnectionProfile, ConnectionSystem, Dimensions, ProfileRecord,
};

use crate::config::DEFAULT_SIMILARITY_COUNT;

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Standard,
    Shape,
    Sector,
}

impl CategoryGroup {
    /// Display order
    pub const ALL: [CategoryGroup; 3] = [
        CategoryGroup::Standard,
        CategoryGroup::Shape,
        CategoryGroup::Sector,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CategoryGroup::Standard => "standard",
            CategoryGroup::Shape => "shape",
            CategoryGroup::Sector => "sector",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CategoryGroup::Standard => "STANDART PROFİLLER",
            CategoryGroup::Shape => "ŞEKİLSEL KATEGORİ",
            CategoryGroup::Sector => "SEKTÖREL PROFİLLER",
        }
    }

    pub fn categories<'a>(&self, groups: &'a CategoryGroups) -> &'a [String] {
        match self {
            CategoryGroup::Standard => &groups.standard,
            CategoryGroup::Shape => &groups.shape,
            CategoryGroup::Sector => &groups.sector,
        }
    }
}

/// Categories whose name contains `query`, ignoring case and surrounding
/// whitespace. An empty query matches everything.
pub fn filter_categories<'a>(categories: &'a [String], query: &str) -> Vec<&'a String> {
    let needle = query.trim().to_lowercase();
    categories
        .iter()
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .collect()
}

// ============================================================================
// Company filter
// ============================================================================

/// Companies selected through the logo toggles, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    selected: Vec<Company>,
}

impl CompanyFilter {
    pub fn toggle(&mut self, company: Company) {
        if let Some(pos) = self.selected.iter().position(|c| *c == company) {
            self.selected.remove(pos);
        } else {
            self.selected.push(company);
        }
    }

    /// With nothing selected every logo shows as active.
    pub fn is_active(&self, company: Company) -> bool {
        self.selected.is_empty() || self.selected.contains(&company)
    }

    /// Value for the `companies` query parameter, if any filter applies.
    pub fn query_value(&self) -> Option<String> {
        if self.selected.is_empty() {
            return None;
        }
        Some(
            self.selected
                .iter()
                .map(Company::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

// ============================================================================
// Profile cards
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBand {
    High,
    Medium,
    Low,
}

impl SimilarityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            SimilarityBand::High
        } else if score >= 0.6 {
            SimilarityBand::Medium
        } else {
            SimilarityBand::Low
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SimilarityBand::High => "similarity-high",
            SimilarityBand::Medium => "similarity-medium",
            SimilarityBand::Low => "similarity-low",
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            SimilarityBand::High => "linear-gradient(135deg, #4ade80 0%, #22c55e 100%)",
            SimilarityBand::Medium => "linear-gradient(135deg, #fbbf24 0%, #f59e0b 100%)",
            SimilarityBand::Low => "linear-gradient(135deg, #f87171 0%, #ef4444 100%)",
        }
    }
}

pub fn score_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

pub const UNKNOWN_MOLD_STATUS: &str = "Bilgi yok";

pub fn mold_available(status: &str) -> bool {
    status.contains("Mevcut")
}

pub fn mold_icon(status: &str) -> &'static str {
    if status == "Var" || mold_available(status) {
        "✅"
    } else {
        "❌"
    }
}

/// `A=100mm, B=50mm, K=2mm`, skipping absent and zero measurements.
pub fn dimension_summary(dimensions: &Dimensions) -> Option<String> {
    let parts: Vec<String> = [("A", dimensions.a), ("B", dimensions.b), ("K", dimensions.k)]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .filter(|v| *v != 0.0)
                .map(|v| format!("{name}={v}mm"))
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// The field's text, or `None` when it is absent or blank. The catalog
/// sends `""` for unknown customers and descriptions.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

pub fn mold_status_text(status: Option<&str>) -> &str {
    non_blank(status).unwrap_or(UNKNOWN_MOLD_STATUS)
}

/// Comma-joined categories, falling back to the single `category` field.
pub fn category_summary(record: &ProfileRecord) -> Option<String> {
    let listed: Vec<&str> = record
        .categories
        .iter()
        .flatten()
        .filter_map(|name| non_blank(Some(name.as_str())))
        .collect();
    if listed.is_empty() {
        non_blank(record.category.as_deref()).map(str::to_string)
    } else {
        Some(listed.join(", "))
    }
}

// ============================================================================
// Connection systems
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPart {
    pub label: &'static str,
    pub code: String,
}

/// The parts a connection profile is assembled from. A profile with no parts
/// is shown as a single part carrying its own code.
pub fn connection_parts(profile: &ConnectionProfile) -> Vec<ConnectionPart> {
    let parts: Vec<ConnectionPart> = [
        ("İç Profil", &profile.inner_profile),
        ("Orta Profil", &profile.middle_profile),
        ("Dış Profil", &profile.outer_profile),
    ]
    .into_iter()
    .filter_map(|(label, code)| {
        code.as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| ConnectionPart {
                label,
                code: c.clone(),
            })
    })
    .collect();

    if parts.is_empty() {
        vec![ConnectionPart {
            label: "Profil",
            code: profile.connection_code.clone(),
        }]
    } else {
        parts
    }
}

/// Part codes of every profile in the system, in display order
pub fn system_part_codes(system: &ConnectionSystem) -> Vec<String> {
    system
        .profiles
        .iter()
        .flat_map(connection_parts)
        .map(|part| part.code)
        .collect()
}

/// Shown in place of the part list for a system without profiles
pub fn empty_system_notice(system: &ConnectionSystem) -> Option<&'static str> {
    system
        .profiles
        .is_empty()
        .then_some("Bu sistemde profil bulunamadı.")
}

/// Catalog search key for a part code: lower-cased, and for `LR-`/`GL-`
/// codes the first dash removed (`LR-3101-1` → `lr3101-1`).
pub fn search_code(code: &str) -> String {
    let lower = code.to_lowercase();
    if lower.starts_with("lr-") || lower.starts_with("gl-") {
        format!("{}{}", &lower[..2], &lower[3..])
    } else {
        lower
    }
}

// ============================================================================
// Similarity search input
// ============================================================================

/// Trimmed, upper-cased profile code, or `None` when blank.
pub fn normalize_profile_code(input: &str) -> Option<String> {
    let code = input.trim().to_uppercase();
    (!code.is_empty()).then_some(code)
}

/// Leading integer of the count field; blank, zero or non-numeric input
/// falls back to the default.
pub fn parse_similarity_count(input: &str) -> u32 {
    let digits: String = input
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_SIMILARITY_COUNT,
        Ok(n) => n,
    }
}
