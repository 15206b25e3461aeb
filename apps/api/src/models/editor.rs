//! Owned résumé state with whole-field replacement setters.
//!
//! Each setter swaps exactly one of the aggregate's five parts and bumps the
//! version. Readers only ever see a fully formed snapshot.

use tracing::debug;

use crate::models::entries::ListEntry;
use crate::models::resume::{Education, PersonalInfo, Resume, Skill, TemplateTag, WorkExperience};

#[derive(Debug, Clone, Default)]
pub struct ResumeEditor {
    resume: Resume,
    version: u64,
}

impl ResumeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Incremented once per replacement; starts at 0 for a fresh aggregate.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) -> u64 {
        self.resume.personal_info = info;
        self.bump("personal_info")
    }

    pub fn set_work_experience(&mut self, entries: Vec<WorkExperience>) -> u64 {
        self.resume.work_experience = entries;
        self.bump("work_experience")
    }

    pub fn set_education(&mut self, entries: Vec<Education>) -> u64 {
        self.resume.education = entries;
        self.bump("education")
    }

    pub fn set_skills(&mut self, entries: Vec<Skill>) -> u64 {
        self.resume.skills = entries;
        self.bump("skills")
    }

    pub fn set_template(&mut self, template: TemplateTag) -> u64 {
        self.resume.template = template;
        self.bump("template")
    }

    fn bump(&mut self, part: &str) -> u64 {
        self.version += 1;
        debug!("Replaced {part}, resume now at version {}", self.version);
        self.version
    }
}

/// Connects a list entry type to the aggregate list that holds it, so list
/// operations can be written once for all three collections.
pub trait EditorList: ListEntry {
    fn current(resume: &Resume) -> &[Self];

    fn replace(editor: &mut ResumeEditor, entries: Vec<Self>) -> u64;
}

impl EditorList for WorkExperience {
    fn current(resume: &Resume) -> &[Self] {
        &resume.work_experience
    }

    fn replace(editor: &mut ResumeEditor, entries: Vec<Self>) -> u64 {
        editor.set_work_experience(entries)
    }
}

impl EditorList for Education {
    fn current(resume: &Resume) -> &[Self] {
        &resume.education
    }

    fn replace(editor: &mut ResumeEditor, entries: Vec<Self>) -> u64 {
        editor.set_education(entries)
    }
}

impl EditorList for Skill {
    fn current(resume: &Resume) -> &[Self] {
        &resume.skills
    }

    fn replace(editor: &mut ResumeEditor, entries: Vec<Self>) -> u64 {
        editor.set_skills(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entries::{add_blank, update, ExperienceField};

    #[test]
    fn test_fresh_editor_is_blank_at_version_zero() {
        let editor = ResumeEditor::new();
        assert_eq!(editor.version(), 0);
        assert_eq!(editor.resume(), &Resume::default());
    }

    #[test]
    fn test_each_replacement_bumps_version() {
        let mut editor = ResumeEditor::new();
        let v1 = editor.set_personal_info(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..PersonalInfo::default()
        });
        let v2 = editor.set_template(TemplateTag::new("classic"));
        assert_eq!((v1, v2), (1, 2));
        assert_eq!(editor.resume().personal_info.full_name, "Ada Lovelace");
        assert_eq!(editor.resume().template.as_str(), "classic");
    }

    #[test]
    fn test_snapshot_taken_before_replacement_is_unchanged() {
        let mut editor = ResumeEditor::new();
        editor.set_work_experience(add_blank(&[]));
        let before = editor.resume().clone();

        let id = before.work_experience[0].id;
        let next = update(
            &editor.resume().work_experience,
            id,
            ExperienceField::Company,
            "Initech",
        );
        editor.set_work_experience(next);

        assert!(before.work_experience[0].company.is_empty());
        assert_eq!(editor.resume().work_experience[0].company, "Initech");
    }

    #[test]
    fn test_editor_list_routes_to_matching_collection() {
        let mut editor = ResumeEditor::new();
        let skills = add_blank(Skill::current(editor.resume()));
        Skill::replace(&mut editor, skills);
        assert_eq!(editor.resume().skills.len(), 1);
        assert!(WorkExperience::current(editor.resume()).is_empty());
    }

    #[test]
    fn test_replacing_one_part_leaves_others() {
        let mut editor = ResumeEditor::new();
        editor.set_skills(add_blank(&[]));
        editor.set_education(add_blank(&[]));
        editor.set_skills(Vec::new());
        assert!(editor.resume().skills.is_empty());
        assert_eq!(editor.resume().education.len(), 1);
    }
}
