//! Hand-authored insight catalog.
//!
//! Unlike every other part of a snapshot, insights are not randomized: each
//! generation re-emits these four entries verbatim.

use once_cell::sync::Lazy;

use crate::models::{Insight, InsightCategory, InsightImpact};

pub static INSIGHTS: Lazy<Vec<Insight>> = Lazy::new(|| {
    vec![
        Insight::new(
            "1",
            "Revenue growth is accelerating",
            "Your revenue growth rate has increased by 15% compared to the previous period. \
             This positive trend is driven primarily by increased sales in the Product A \
             category and improved conversion rates from your latest marketing campaign.",
            InsightCategory::Success,
            InsightImpact::High,
            &[
                "Increase inventory of Product A to meet growing demand",
                "Expand the successful marketing campaign to other channels",
                "Consider bundling Product A with complementary products to increase average order value",
            ],
        ),
        Insight::new(
            "2",
            "Customer acquisition cost is rising",
            "The cost to acquire new customers has increased by 12% over the last quarter. \
             This trend could impact overall profitability if not addressed.",
            InsightCategory::Warning,
            InsightImpact::Medium,
            &[
                "Review and optimize current marketing spend across channels",
                "Implement a referral program to decrease acquisition costs",
                "Focus on retention strategies for existing customers",
            ],
        ),
        Insight::new(
            "3",
            "Mobile traffic conversion opportunity",
            "Mobile traffic has increased by 35%, but the conversion rate on mobile devices \
             is 40% lower than desktop. There is a significant opportunity to improve mobile \
             user experience.",
            InsightCategory::Info,
            InsightImpact::High,
            &[
                "Conduct usability testing for the mobile checkout process",
                "Implement mobile-specific UI improvements",
                "Optimize page load times for mobile devices",
            ],
        ),
        Insight::new(
            "4",
            "Inventory alert for top products",
            "Several top-selling products are projected to go out of stock within the next \
             2 weeks based on current sales velocity.",
            InsightCategory::Action,
            InsightImpact::High,
            &[
                "Expedite restocking of identified products",
                "Implement inventory alerts at higher threshold levels",
                "Consider temporary promotion of alternative products",
            ],
        ),
    ]
});

/// A fresh copy of the catalog.
pub fn insights() -> Vec<Insight> {
    INSIGHTS.clone()
}
