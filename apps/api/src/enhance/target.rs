//! Which text field an enhancement session reads from and writes back to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::entries::{contains, update, EducationField, ExperienceField};
use crate::models::{EditorList, Education, PersonalInfo, Resume, ResumeEditor, WorkExperience};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhanceTarget {
    Summary,
    ExperienceDescription(Uuid),
    EducationDescription(Uuid),
}

impl EnhanceTarget {
    /// Field name passed to the backend.
    pub fn field_name(&self) -> &'static str {
        match self {
            EnhanceTarget::Summary => "summary",
            EnhanceTarget::ExperienceDescription(_) | EnhanceTarget::EducationDescription(_) => {
                "description"
            }
        }
    }

    /// Current text of the field, or `None` if the entry does not exist.
    pub fn read(&self, resume: &Resume) -> Option<String> {
        match self {
            EnhanceTarget::Summary => Some(resume.personal_info.summary.clone()),
            EnhanceTarget::ExperienceDescription(id) => resume
                .work_experience
                .iter()
                .find(|job| job.id == *id)
                .map(|job| job.description.clone()),
            EnhanceTarget::EducationDescription(id) => resume
                .education
                .iter()
                .find(|school| school.id == *id)
                .map(|school| school.description.clone()),
        }
    }

    /// Replaces the field with `text` through the editor's setters, reading
    /// the rest of the record as it is now. Returns `false` if the entry has
    /// been removed in the meantime, in which case nothing changes.
    pub fn write(&self, editor: &mut ResumeEditor, text: String) -> bool {
        match self {
            EnhanceTarget::Summary => {
                let info = PersonalInfo {
                    summary: text,
                    ..editor.resume().personal_info.clone()
                };
                editor.set_personal_info(info);
                true
            }
            EnhanceTarget::ExperienceDescription(id) => {
                let jobs = WorkExperience::current(editor.resume());
                if !contains(jobs, *id) {
                    return false;
                }
                let next = update(jobs, *id, ExperienceField::Description, &text);
                WorkExperience::replace(editor, next);
                true
            }
            EnhanceTarget::EducationDescription(id) => {
                let schools = Education::current(editor.resume());
                if !contains(schools, *id) {
                    return false;
                }
                let next = update(schools, *id, EducationField::Description, &text);
                Education::replace(editor, next);
                true
            }
        }
    }
}
