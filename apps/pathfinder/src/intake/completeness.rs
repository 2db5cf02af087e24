use serde::Serialize;

use crate::models::profile::Profile;

/// Intake fields that must be filled before the form can be submitted.
///
/// All five are required. Text fields count as filled when they are
/// non-empty after trimming; list fields when they hold at least one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Degree,
    Modules,
    Interests,
    Goals,
    LifeGoals,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Degree => "degree or field of study",
            RequiredField::Modules => "at least one module or topic",
            RequiredField::Interests => "at least one hobby or interest",
            RequiredField::Goals => "career goals",
            RequiredField::LifeGoals => "life goals and values",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletenessReport {
    /// Missing fields in form order.
    pub missing: Vec<RequiredField>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Human-readable list of what is still missing, e.g. for a 400 body.
    pub fn describe(&self) -> String {
        self.missing
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn check_completeness(profile: &Profile) -> CompletenessReport {
    let checks = [
        (RequiredField::Degree, !profile.degree.trim().is_empty()),
        (RequiredField::Modules, !profile.modules.is_empty()),
        (RequiredField::Interests, !profile.interests.is_empty()),
        (RequiredField::Goals, !profile.goals.trim().is_empty()),
        (RequiredField::LifeGoals, !profile.life_goals.trim().is_empty()),
    ];

    CompletenessReport {
        missing: checks
            .into_iter()
            .filter(|(_, filled)| !filled)
            .map(|(field, _)| field)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> Profile {
        Profile {
            degree: "CS".to_string(),
            modules: vec!["X".to_string()],
            interests: vec!["Y".to_string()],
            goals: "g".to_string(),
            life_goals: "l".to_string(),
        }
    }

    #[test]
    fn test_empty_profile_is_missing_everything() {
        let report = check_completeness(&Profile::default());
        assert!(!report.is_complete());
        assert_eq!(
            report.missing,
            vec![
                RequiredField::Degree,
                RequiredField::Modules,
                RequiredField::Interests,
                RequiredField::Goals,
                RequiredField::LifeGoals,
            ]
        );
    }

    #[test]
    fn test_all_fields_filled_is_complete() {
        assert!(check_completeness(&complete_profile()).is_complete());
    }

    #[test]
    fn test_each_field_alone_blocks_submission() {
        let blanks: [fn(&mut Profile); 5] = [
            |p| p.degree.clear(),
            |p| p.modules.clear(),
            |p| p.interests.clear(),
            |p| p.goals.clear(),
            |p| p.life_goals.clear(),
        ];

        for blank in blanks {
            let mut profile = complete_profile();
            blank(&mut profile);
            let report = check_completeness(&profile);
            assert_eq!(report.missing.len(), 1);
        }
    }

    #[test]
    fn test_whitespace_only_text_counts_as_missing() {
        let mut profile = complete_profile();
        profile.degree = "   ".to_string();
        profile.life_goals = "\n".to_string();

        let report = check_completeness(&profile);
        assert_eq!(
            report.missing,
            vec![RequiredField::Degree, RequiredField::LifeGoals]
        );
        assert_eq!(
            report.describe(),
            "degree or field of study, life goals and values"
        );
    }
}
