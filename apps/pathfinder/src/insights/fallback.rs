use crate::models::insight::{CareerPath, Insight};
use crate::models::profile::Profile;

const FALLBACK_SUMMARY: &str = "We couldn't generate a personalised analysis right now, \
    so here is a general starting point. Your studies have already given you a strong mix \
    of analytical and creative skills, and your interests show where that mix could take you.";

const FALLBACK_TRANSFERABLE_SKILLS: &[&str] = &[
    "Critical thinking",
    "Problem-solving",
    "Communication",
    "Time management",
    "Leadership",
    "Collaboration",
    "Adaptability",
];

const FALLBACK_TECHNICAL_SKILLS: &[&str] =
    &["Research methodology", "Analytical thinking", "Writing"];

struct FallbackPath {
    title: &'static str,
    description: &'static str,
    next_steps: &'static [&'static str],
    encouragement: &'static str,
}

const FALLBACK_CAREER_PATHS: &[FallbackPath] = &[
    FallbackPath {
        title: "Content Strategist",
        description: "Create compelling content that tells stories and builds communities.",
        next_steps: &[
            "Build a portfolio of writing samples",
            "Learn content management systems",
            "Study successful content campaigns",
        ],
        encouragement: "Your communication skills and creative thinking are exactly what brands need to connect with audiences.",
    },
    FallbackPath {
        title: "Social Impact Coordinator",
        description: "Work with organisations to create positive change in communities.",
        next_steps: &[
            "Volunteer with local nonprofits",
            "Learn about social impact measurement",
            "Network with mission-driven organisations",
        ],
        encouragement: "Your passion for making a difference can create meaningful career opportunities in the social sector.",
    },
    FallbackPath {
        title: "Project Manager",
        description: "Lead teams and coordinate complex projects from start to finish.",
        next_steps: &[
            "Get certified in project management",
            "Practice leading team projects",
            "Learn project management software",
        ],
        encouragement: "Your organisational skills and attention to detail are valuable in any industry.",
    },
];

/// Insight shown when the insight endpoint cannot be reached.
///
/// Only `interestSkills` depends on the profile: each interest, first
/// character upper-cased, followed by " knowledge". Every other field is
/// constant.
pub fn fallback_insight(profile: &Profile) -> Insight {
    Insight {
        summary: FALLBACK_SUMMARY.to_string(),
        transferable_skills: to_strings(FALLBACK_TRANSFERABLE_SKILLS),
        technical_skills: to_strings(FALLBACK_TECHNICAL_SKILLS),
        interest_skills: profile
            .interests
            .iter()
            .map(|interest| format!("{} knowledge", capitalize_first(interest)))
            .collect(),
        career_paths: FALLBACK_CAREER_PATHS
            .iter()
            .map(|path| CareerPath {
                title: path.title.to_string(),
                description: path.description.to_string(),
                next_steps: to_strings(path.next_steps),
                encouragement: path.encouragement.to_string(),
                life_alignment: None,
            })
            .collect(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Upper-cases the first character and leaves the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(interests: &[&str]) -> Profile {
        Profile {
            degree: "Computer Science".to_string(),
            modules: vec!["Data Structures".to_string()],
            interests: interests.iter().map(|s| s.to_string()).collect(),
            goals: "g".to_string(),
            life_goals: "l".to_string(),
        }
    }

    #[test]
    fn test_interest_skills_are_capitalised_with_suffix() {
        let insight = fallback_insight(&profile_with(&["photography", "Rock climbing", "éclairs"]));
        assert_eq!(
            insight.interest_skills,
            vec![
                "Photography knowledge",
                "Rock climbing knowledge",
                "Éclairs knowledge"
            ]
        );
    }

    #[test]
    fn test_only_interests_influence_the_fallback() {
        let a = fallback_insight(&profile_with(&["chess"]));
        let mut other = profile_with(&["chess"]);
        other.degree = "History".to_string();
        other.modules = vec!["Tudors".to_string(), "Romans".to_string()];
        other.goals = "Teach".to_string();
        let b = fallback_insight(&other);
        assert_eq!(a, b);
    }

    #[test]
    fn test_constant_sections_are_populated() {
        let insight = fallback_insight(&profile_with(&[]));
        assert!(insight.interest_skills.is_empty());
        assert_eq!(insight.transferable_skills.len(), 7);
        assert_eq!(insight.technical_skills.len(), 3);
        assert_eq!(insight.career_paths.len(), 3);
        assert!(insight
            .career_paths
            .iter()
            .all(|p| p.next_steps.len() == 3 && p.life_alignment.is_none()));
    }

    #[test]
    fn test_capitalize_first_edge_cases() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("already Capital"), "Already Capital");
    }
}
