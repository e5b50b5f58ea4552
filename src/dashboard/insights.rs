use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::models::Insight;

/// Ids of insights currently expanded in the panel.
#[derive(Debug, Clone, Default)]
pub struct ExpandedInsights {
    ids: FxHashSet<String>,
}

impl ExpandedInsights {
    /// Flip `id` and return whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView {
    pub insight: Insight,
    pub expanded: bool,
}

pub fn insight_views(insights: &[Insight], expanded: &ExpandedInsights) -> Vec<InsightView> {
    insights
        .iter()
        .map(|insight| InsightView {
            insight: insight.clone(),
            expanded: expanded.is_expanded(&insight.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::catalog;

    #[test]
    fn test_toggle_flips_membership() {
        let mut expanded = ExpandedInsights::default();
        assert!(expanded.toggle("2"));
        assert!(expanded.is_expanded("2"));
        assert!(!expanded.toggle("2"));
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_views_reflect_expanded_ids() {
        let mut expanded = ExpandedInsights::default();
        expanded.toggle("3");

        let views = insight_views(&catalog::insights(), &expanded);
        let flags: Vec<bool> = views.iter().map(|v| v.expanded).collect();
        assert_eq!(flags, vec![false, false, true, false]);
    }
}
