//! Search domain models.

use serde::{Deserialize, Serialize};

/// The kind of entity a search record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// A compliance control (e.g., a NIST or SOC 2 control).
    Control,
    /// An entry in the risk register.
    Risk,
    /// A tracked vulnerability finding.
    Vulnerability,
    /// A person (control owner, auditor, stakeholder).
    Person,
    /// A generated report.
    Report,
}

/// Display bucket for grouped search results, in fixed display order.
///
/// Record types without a dedicated bucket fall into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchGroup {
    Controls,
    Risks,
    Vulnerabilities,
    People,
    Other,
}

impl SearchGroup {
    /// All buckets in their committed display order.
    pub const DISPLAY_ORDER: [SearchGroup; 5] = [
        SearchGroup::Controls,
        SearchGroup::Risks,
        SearchGroup::Vulnerabilities,
        SearchGroup::People,
        SearchGroup::Other,
    ];

    /// Human-readable bucket heading.
    pub fn label(&self) -> &'static str {
        match self {
            SearchGroup::Controls => "Controls",
            SearchGroup::Risks => "Risks",
            SearchGroup::Vulnerabilities => "Vulnerabilities",
            SearchGroup::People => "People",
            SearchGroup::Other => "Other",
        }
    }
}

impl RecordType {
    /// The display bucket this record type belongs to.
    pub fn group(&self) -> SearchGroup {
        match self {
            RecordType::Control => SearchGroup::Controls,
            RecordType::Risk => SearchGroup::Risks,
            RecordType::Vulnerability => SearchGroup::Vulnerabilities,
            RecordType::Person => SearchGroup::People,
            RecordType::Report => SearchGroup::Other,
        }
    }
}

/// A static, read-only entity available to the search matcher.
///
/// Records live for the lifetime of the process and are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Stable identifier.
    pub id: String,
    /// The kind of entity this record describes.
    pub record_type: RecordType,
    /// Primary display title; matched against the query.
    pub title: String,
    /// Descriptive subtitle (framework path, team, etc.); also matched.
    pub path: String,
    /// Type-specific display field: lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Type-specific display field: severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Type-specific display field: numeric score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SearchRecord {
    /// Creates a record with only the matched fields set.
    pub fn new(
        id: impl Into<String>,
        record_type: RecordType,
        title: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            record_type,
            title: title.into(),
            path: path.into(),
            status: None,
            severity: None,
            score: None,
        }
    }

    /// Sets the status display field.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the severity display field.
    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    /// Sets the numeric score display field.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// One non-empty bucket of matched records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultGroup {
    /// The display bucket.
    pub group: SearchGroup,
    /// Matched records, in source order.
    pub records: Vec<SearchRecord>,
}
