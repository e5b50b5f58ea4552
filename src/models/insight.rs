use serde::{Deserialize, Serialize};

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Success,
    Warning,
    Info,
    Action,
}

impl InsightCategory {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Success => Tone::Green,
            Self::Warning => Tone::Orange,
            Self::Info => Tone::Blue,
            Self::Action => Tone::Purple,
        }
    }

    /// Icon name drawn next to the insight title.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "trending-up",
            Self::Warning => "trending-down",
            Self::Info => "lightbulb",
            Self::Action => "alert-triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightImpact {
    High,
    Medium,
    Low,
}

impl InsightImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Red,
            Self::Medium => Tone::Yellow,
            Self::Low => Tone::Green,
        }
    }

    /// Badge text, e.g. "high impact".
    pub fn badge(&self) -> String {
        format!("{} impact", self.as_str())
    }
}

/// A categorized recommendation shown in the insights panel.
///
/// Insights are immutable once built. Whether one is expanded in the panel is
/// tracked by the dashboard, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
    pub impact: InsightImpact,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_items: Vec<String>,
}

impl Insight {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        category: InsightCategory,
        impact: InsightImpact,
        action_items: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            impact,
            action_items: action_items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_action_items(&self) -> bool {
        !self.action_items.is_empty()
    }
}
