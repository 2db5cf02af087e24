use serde::{Deserialize, Serialize};

use crate::intake::dedup::UniqueList;

/// The intake data a student hands off to the results view.
///
/// Field names on the wire are camelCase (`lifeGoals`) because the insight
/// endpoint consumes this struct directly as its JSON body. `modules` and
/// `interests` are ordered and duplicate-free once they leave the intake form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Degree or field of study.
    pub degree: String,
    /// Modules or topics the student enjoyed.
    pub modules: Vec<String>,
    /// Hobbies and interests.
    pub interests: Vec<String>,
    /// Career goals or dreams.
    #[serde(default)]
    pub goals: String,
    /// Life goals and personal values.
    #[serde(default)]
    pub life_goals: String,
}

impl Profile {
    /// Rebuilds `modules` and `interests` the way the intake form does:
    /// entries trimmed, blanks and repeats dropped, first occurrence kept.
    pub fn normalized(self) -> Self {
        Self {
            modules: UniqueList::from_items(&self.modules).into_vec(),
            interests: UniqueList::from_items(&self.interests).into_vec(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_camel_case_wire_names() {
        let profile = Profile {
            degree: "Computer Science".to_string(),
            modules: vec!["Data Structures".to_string()],
            interests: vec!["Photography".to_string()],
            goals: "I want to work in tech".to_string(),
            life_goals: "I want work-life balance".to_string(),
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["degree"], "Computer Science");
        assert_eq!(value["modules"][0], "Data Structures");
        assert_eq!(value["lifeGoals"], "I want work-life balance");
        assert!(value.get("life_goals").is_none());
    }

    #[test]
    fn test_profile_accepts_missing_goal_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"degree":"History","modules":["Tudors"],"interests":["Chess"]}"#,
        )
        .unwrap();
        assert_eq!(profile.goals, "");
        assert_eq!(profile.life_goals, "");
    }

    #[test]
    fn test_normalized_drops_blank_and_repeated_entries() {
        let profile = Profile {
            degree: "History".to_string(),
            modules: vec!["Tudors".to_string(), " Tudors ".to_string(), "".to_string()],
            interests: vec!["   ".to_string(), "chess".to_string(), "chess".to_string()],
            goals: "  Teach  ".to_string(),
            life_goals: "Travel".to_string(),
        }
        .normalized();

        assert_eq!(profile.modules, vec!["Tudors"]);
        assert_eq!(profile.interests, vec!["chess"]);
        assert_eq!(profile.goals, "  Teach  ");
    }
}
