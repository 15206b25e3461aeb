//! Data selection shared by every template.
//!
//! Every inclusion decision is made here, once:
//! - header is always present; blank sub-fields are dropped, a blank name
//!   becomes the placeholder
//! - summary appears iff non-empty
//! - experience / education / skills appear iff their list is non-empty,
//!   entries in list order
//! - a blank experience end date reads "Present"; GPA appears iff non-empty

use crate::models::resume::{Education, PersonalInfo, Resume, WorkExperience};
use crate::render::document::{
    Contact, ContactKind, Entry, Paragraph, Period, NAME_PLACEHOLDER, PRESENT_MARKER,
};
use crate::render::grouping::{group_by_category, SkillGroup};

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeView {
    pub name: String,
    pub title: Option<String>,
    pub photo: Option<String>,
    pub contacts: Vec<Contact>,
    pub summary: Option<Paragraph>,
    pub experience: Option<Vec<Entry>>,
    pub education: Option<Vec<Entry>>,
    pub skills: Option<Vec<SkillGroup>>,
}

impl ResumeView {
    pub fn select(resume: &Resume) -> Self {
        let info = &resume.personal_info;
        Self {
            name: present(&info.full_name).unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            title: present(&info.title),
            photo: present(&info.photo),
            contacts: contacts(info),
            summary: present(&info.summary).map(|s| Paragraph::single(&s)),
            experience: non_empty(&resume.work_experience)
                .map(|jobs| jobs.iter().map(experience_entry).collect()),
            education: non_empty(&resume.education)
                .map(|schools| schools.iter().map(education_entry).collect()),
            skills: non_empty(&resume.skills).map(group_by_category),
        }
    }
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn non_empty<T>(list: &[T]) -> Option<&[T]> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

fn contacts(info: &PersonalInfo) -> Vec<Contact> {
    [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Location, &info.location),
        (ContactKind::Linkedin, &info.linkedin),
        (ContactKind::Github, &info.github),
        (ContactKind::Website, &info.website),
    ]
    .into_iter()
    .filter_map(|(kind, value)| present(value).map(|value| Contact { kind, value }))
    .collect()
}

fn experience_entry(job: &WorkExperience) -> Entry {
    Entry {
        title: job.position.clone(),
        subtitle: job.company.clone(),
        period: Period {
            start: job.start_date.clone(),
            end: present(&job.end_date).unwrap_or_else(|| PRESENT_MARKER.to_string()),
        },
        location: present(&job.location),
        note: None,
        body: present(&job.description).map(|d| Paragraph::with_breaks(&d)),
    }
}

fn education_entry(school: &Education) -> Entry {
    Entry {
        title: school.degree.clone(),
        subtitle: school.institution.clone(),
        period: Period {
            start: school.start_date.clone(),
            end: school.end_date.clone(),
        },
        location: present(&school.location),
        note: present(&school.gpa).map(|gpa| format!("GPA: {gpa}")),
        body: present(&school.description).map(|d| Paragraph::single(&d)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn job(end_date: &str, description: &str) -> WorkExperience {
        WorkExperience {
            id: Uuid::new_v4(),
            company: "Initech".to_string(),
            position: "Engineer".to_string(),
            location: String::new(),
            start_date: "2019".to_string(),
            end_date: end_date.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_blank_resume_selects_only_placeholder_header() {
        let view = ResumeView::select(&Resume::default());
        assert_eq!(view.name, "Your Name");
        assert!(view.title.is_none());
        assert!(view.photo.is_none());
        assert!(view.contacts.is_empty());
        assert!(view.summary.is_none());
        assert!(view.experience.is_none());
        assert!(view.education.is_none());
        assert!(view.skills.is_none());
    }

    #[test]
    fn test_contacts_skip_blanks_and_keep_order() {
        let mut resume = Resume::default();
        resume.personal_info.website = "ada.dev".to_string();
        resume.personal_info.email = "ada@example.com".to_string();
        resume.personal_info.github = "github.com/ada".to_string();

        let kinds: Vec<ContactKind> = ResumeView::select(&resume)
            .contacts
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Github, ContactKind::Website]
        );
    }

    #[test]
    fn test_blank_end_date_reads_present() {
        let mut resume = Resume::default();
        resume.work_experience = vec![job("", ""), job("2021", "")];
        let entries = ResumeView::select(&resume).experience.expect("has experience");
        assert_eq!(entries[0].period.end, "Present");
        assert_eq!(entries[1].period.end, "2021");
        assert!(entries[0].body.is_none());
    }

    #[test]
    fn test_description_lines_are_preserved() {
        let mut resume = Resume::default();
        resume.work_experience = vec![job("", "line one\nline two")];
        let entries = ResumeView::select(&resume).experience.expect("has experience");
        let body = entries[0].body.as_ref().expect("has body");
        assert_eq!(body.lines, vec!["line one", "line two"]);
    }

    #[test]
    fn test_gpa_note_only_when_present() {
        let mut resume = Resume::default();
        resume.education = vec![
            Education {
                id: Uuid::new_v4(),
                gpa: "3.9".to_string(),
                ..Education::default()
            },
            Education {
                id: Uuid::new_v4(),
                ..Education::default()
            },
        ];
        let entries = ResumeView::select(&resume).education.expect("has education");
        assert_eq!(entries[0].note.as_deref(), Some("GPA: 3.9"));
        assert!(entries[1].note.is_none());
        assert_eq!(entries[1].period.end, "", "education has no Present marker");
    }
}
