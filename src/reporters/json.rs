//! JSON reporter
//!
//! Outputs the full result as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or storing alongside
//! the content item.

use crate::models::SeoGuidanceResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &SeoGuidanceResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render several results as a JSON array
pub fn render_many(results: &[SeoGuidanceResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["overallScore"], result.overall_score);
        assert!(parsed["categories"]["metaTags"]["maxScore"].is_number());
        assert!(!parsed["inPageChecklist"]
            .as_array()
            .expect("checklist array")
            .is_empty());
        assert_eq!(parsed["lastUpdated"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_json_round_trips() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let back: SeoGuidanceResult = serde_json::from_str(&json_str).expect("parse result");
        assert_eq!(back, result);
    }
}
