//! The résumé aggregate: personal info, three ordered lists and a template tag.
//!
//! Pure data. Every text field is free-form and may be empty; nothing here is
//! validated. Mutation goes through `models::editor::ResumeEditor` and the list
//! helpers in `models::entries`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::render::TemplateKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    /// Professional title shown under the name.
    pub title: String,
    pub github: String,
    /// Reference (URL or data URI) to a profile photo.
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: Uuid,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    /// Empty means the position is ongoing.
    #[serde(default)]
    pub end_date: String,
    /// Line breaks are meaningful and are kept as-is when rendered.
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    /// Free text. `SkillCategory` is only a creation-time suggestion.
    #[serde(default = "default_category")]
    pub category: String,
}

pub(crate) fn default_category() -> String {
    SkillCategory::default().label().to_string()
}

/// The category taxonomy offered when a skill is created. Not enforced
/// afterwards: `Skill::category` stays a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Technical,
    SoftSkills,
    Languages,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Technical,
        SkillCategory::SoftSkills,
        SkillCategory::Languages,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    /// The literal string stored on a skill created under this category.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

/// The stored template selection.
///
/// The raw string the client sent. An unrecognised value survives round
/// trips; resolution to a renderer happens in `kind()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateTag(pub String);

impl TemplateTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the tag, falling back to the default variant for anything
    /// outside the known set.
    pub fn kind(&self) -> TemplateKind {
        TemplateKind::resolve(&self.0)
    }
}

impl Default for TemplateTag {
    fn default() -> Self {
        Self(TemplateKind::default().tag().to_string())
    }
}

impl From<TemplateKind> for TemplateTag {
    fn from(kind: TemplateKind) -> Self {
        Self(kind.tag().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub template: TemplateTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resume_is_blank_with_modern_template() {
        let resume = Resume::default();
        assert_eq!(resume.personal_info, PersonalInfo::default());
        assert!(resume.personal_info.full_name.is_empty());
        assert!(resume.work_experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.template.as_str(), "modern");
    }

    #[test]
    fn test_skill_category_labels() {
        let labels: Vec<&str> = SkillCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Technical", "Soft Skills", "Languages", "Tools", "Other"]
        );
    }

    #[test]
    fn test_unknown_template_tag_survives_deserialization() {
        let json = r#"{"template": "neon"}"#;
        let resume: Resume = serde_json::from_str(json).expect("partial resume parses");
        assert_eq!(resume.template.as_str(), "neon");
        assert_eq!(resume.template.kind(), TemplateKind::Modern);
    }

    #[test]
    fn test_skill_without_category_lands_in_default_group() {
        let id = Uuid::new_v4();
        let skill: Skill =
            serde_json::from_str(&format!(r#"{{"id": "{id}", "name": "Rust"}}"#)).expect("parses");
        assert_eq!(skill.category, "Technical");
        assert_eq!(skill.category, Skill::default().category);
    }

    #[test]
    fn test_personal_info_missing_fields_default_to_empty() {
        let info: PersonalInfo =
            serde_json::from_str(r#"{"full_name": "Ada"}"#).expect("parses");
        assert_eq!(info.full_name, "Ada");
        assert!(info.photo.is_empty());
        assert!(info.github.is_empty());
    }
}
