use serde::{Deserialize, Serialize};

/// Structured career guidance rendered on the results page.
///
/// Either returned by the insight endpoint or built locally by
/// [`crate::insights::fallback::fallback_insight`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub summary: String,
    pub transferable_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub interest_skills: Vec<String>,
    pub career_paths: Vec<CareerPath>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub next_steps: Vec<String>,
    pub encouragement: String,
    /// How the path fits the student's stated life goals. Older endpoint
    /// versions omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_alignment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_parses_endpoint_shape() {
        let json = r#"{
            "summary": "A thoughtful scientist.",
            "transferableSkills": ["Communication"],
            "technicalSkills": ["Python"],
            "interestSkills": ["Photography knowledge"],
            "careerPaths": [{
                "title": "Data Scientist",
                "description": "Turn data into decisions.",
                "nextSteps": ["Take a course"],
                "encouragement": "You can do it.",
                "lifeAlignment": "Flexible hours."
            }]
        }"#;

        let insight: Insight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.transferable_skills, vec!["Communication"]);
        assert_eq!(
            insight.career_paths[0].life_alignment.as_deref(),
            Some("Flexible hours.")
        );
    }

    #[test]
    fn test_career_path_without_life_alignment() {
        let json = r#"{
            "title": "Project Manager",
            "description": "Lead teams.",
            "nextSteps": [],
            "encouragement": "Go for it."
        }"#;

        let path: CareerPath = serde_json::from_str(json).unwrap();
        assert!(path.life_alignment.is_none());

        let value = serde_json::to_value(&path).unwrap();
        assert!(value.get("lifeAlignment").is_none());
    }
}
