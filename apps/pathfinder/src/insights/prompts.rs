// Prompt constants for the local insight function.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::profile::Profile;

/// Career prompt template. Replace `{form_data}` before sending.
pub const CAREER_PROMPT_TEMPLATE: &str = r#"You are a career guidance expert. Based on the following comprehensive form data from a user, generate personalised career insights that align with both their professional aspirations and personal values.

Form Data:
{form_data}


Generate a response, in British English, that matches this exact structure:

{
  "summary": "A personalised 2-3 sentence summary that mentions their degree, modules, interests, and how their life goals align with potential career directions",
  "transferableSkills": ["Array of 6-8 transferable skills they've developed"],
  "technicalSkills": ["Array of 4-6 technical skills relevant to their degree field"],
  "interestSkills": ["Array of 3-5 skills derived from their hobbies/interests"],
  "careerPaths": [
    {
      "title": "Career Path Title",
      "description": "One sentence description of what this role involves and its impact",
      "nextSteps": ["3-4 specific, actionable steps they can take to pursue this path"],
      "encouragement": "One motivational sentence connecting their background to this career",
      "lifeAlignment": "One sentence explaining how this career aligns with their stated life goals and values"
    }
  ]
}

Requirements:
- Generate exactly 5 unique career paths that are creative and might not be obvious choices
- CRITICALLY IMPORTANT: Ensure career paths strongly align with their life goals and values (work-life balance, making a difference, helping others, financial security, etc.)
- Make sure career paths are diverse across different industries but all respect their life values
- Tailor technical skills to their degree field (STEM, business, arts, etc.)
- Include both traditional and emerging career options that match their life priorities
- Keep descriptions concise but inspiring
- Make next steps specific and actionable
- Ensure encouragement is personal and references their specific background
- The "lifeAlignment" field should clearly explain how each career path supports their personal values and life goals
- If they mentioned work-life balance, prioritise careers known for this
- If they mentioned making a difference, focus on impact-driven roles
- If they mentioned financial security, consider earning potential
- If they mentioned helping others, emphasise people-focused careers

Return only the JSON object, no additional text or markdown formatting."#;

pub fn career_system_prompt() -> String {
    format!("You are a career guidance expert writing in British English. {JSON_ONLY_SYSTEM}")
}

/// Fills the career prompt with the profile as pretty-printed JSON.
pub fn build_career_prompt(profile: &Profile) -> Result<String, serde_json::Error> {
    let form_data = serde_json::to_string_pretty(profile)?;
    Ok(CAREER_PROMPT_TEMPLATE.replace("{form_data}", &form_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_profile_json() {
        let profile = Profile {
            degree: "Computer Science".to_string(),
            modules: vec!["Data Structures".to_string()],
            interests: vec!["Photography".to_string()],
            goals: "Work in tech".to_string(),
            life_goals: "Help others".to_string(),
        };

        let prompt = build_career_prompt(&profile).unwrap();
        assert!(prompt.contains("\"degree\": \"Computer Science\""));
        assert!(prompt.contains("\"lifeGoals\": \"Help others\""));
        assert!(!prompt.contains("{form_data}"));
        assert!(prompt.contains("exactly 5 unique career paths"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        assert!(career_system_prompt().contains("valid JSON only"));
    }
}
