//! Prompt construction for the insight backend.

use stockpilot_core::recommend::{Item, Recommendation};

/// Ask for one short insight per recommendation, as a bare JSON array.
pub(crate) fn insight_prompt(items: &[Item], recommendations: &[Recommendation]) -> String {
    let batch = serde_json::to_string_pretty(recommendations).unwrap_or_else(|_| "[]".to_string());

    format!(
        "As an inventory management AI assistant, analyze these purchase \
         recommendations and provide brief, actionable insights for each.\n\n\
         Items needing restock: {item_count}\n\
         Recommendations: {batch}\n\n\
         For each recommendation, provide a one-sentence insight about:\n\
         - Why this is a good purchase\n\
         - Any seasonal or trend considerations\n\
         - Risk factors to consider\n\n\
         Return ONLY a JSON array of insights (one per recommendation), each as a short string.\n\
         Example format: [\"insight 1\", \"insight 2\", \"insight 3\"]",
        item_count = items.len(),
    )
}
