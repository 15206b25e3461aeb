pub mod editor;
pub mod entries;
pub mod resume;

pub use editor::{EditorList, ResumeEditor};
pub use resume::{Education, PersonalInfo, Resume, Skill, SkillCategory, TemplateTag, WorkExperience};
