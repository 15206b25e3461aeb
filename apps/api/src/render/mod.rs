// Template rendering: Resume -> Document, dispatched on the template tag.
// Pure and infallible. Unknown tags resolve to the default variant.

pub mod document;
pub mod grouping;
pub mod templates;
pub mod text;
pub mod view;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::Resume;

pub use document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Minimalist,
    Professional,
    Creative,
}

pub type Renderer = fn(&Resume) -> Document;

/// Tag-to-renderer table. Lookups that miss fall through to `TemplateKind::default()`.
const RENDERERS: [(TemplateKind, Renderer); 5] = [
    (TemplateKind::Modern, templates::modern::render),
    (TemplateKind::Classic, templates::classic::render),
    (TemplateKind::Minimalist, templates::minimalist::render),
    (TemplateKind::Professional, templates::professional::render),
    (TemplateKind::Creative, templates::creative::render),
];

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Minimalist,
        TemplateKind::Professional,
        TemplateKind::Creative,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Minimalist => "minimalist",
            TemplateKind::Professional => "professional",
            TemplateKind::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Classic => "Classic",
            TemplateKind::Minimalist => "Minimalist",
            TemplateKind::Professional => "Professional",
            TemplateKind::Creative => "Creative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Bold and colorful",
            TemplateKind::Classic => "Traditional and formal",
            TemplateKind::Minimalist => "Clean and simple",
            TemplateKind::Professional => "Elegant and refined",
            TemplateKind::Creative => "Vibrant and artistic",
        }
    }

    /// Exact, case-sensitive match on the tag; anything else is the default.
    pub fn resolve(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .unwrap_or_default()
    }

    pub fn renderer(&self) -> Renderer {
        RENDERERS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, renderer)| *renderer)
            .unwrap_or(templates::modern::render)
    }
}

/// Renders the resume with the variant its template tag selects.
pub fn render(resume: &Resume) -> Document {
    let kind = resume.template.kind();
    if kind.tag() != resume.template.as_str() {
        debug!(
            "Unknown template tag '{}', rendering with {}",
            resume.template.as_str(),
            kind.tag()
        );
    }
    let document = kind.renderer()(resume);
    debug!(
        "Rendered {} document with {} sections",
        kind.tag(),
        document.sections.len()
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Skill, TemplateTag, WorkExperience};
    use crate::render::document::SectionKind;
    use crate::render::templates::printed_content;
    use uuid::Uuid;

    fn full_resume() -> Resume {
        let mut resume = Resume::default();
        let info = &mut resume.personal_info;
        info.full_name = "Ada Lovelace".to_string();
        info.title = "Analyst".to_string();
        info.email = "ada@example.com".to_string();
        info.phone = "+44 20 0000".to_string();
        info.location = "London".to_string();
        info.linkedin = "linkedin.com/in/ada".to_string();
        info.github = "github.com/ada".to_string();
        info.website = "ada.dev".to_string();
        info.photo = "https://img.example/ada.png".to_string();
        info.summary = "Wrote the first program.".to_string();
        resume.work_experience = vec![
            WorkExperience {
                id: Uuid::new_v4(),
                company: "Analytical Engine Co".to_string(),
                position: "Programmer".to_string(),
                location: "London".to_string(),
                start_date: "1842".to_string(),
                end_date: String::new(),
                description: "• Notes on the engine\n• Bernoulli numbers".to_string(),
            },
            WorkExperience {
                id: Uuid::new_v4(),
                company: "Royal Society".to_string(),
                position: "Translator".to_string(),
                location: String::new(),
                start_date: "1840".to_string(),
                end_date: "1842".to_string(),
                description: String::new(),
            },
        ];
        resume.education = vec![Education {
            id: Uuid::new_v4(),
            institution: "Home tutoring".to_string(),
            degree: "Mathematics".to_string(),
            location: String::new(),
            start_date: "1830".to_string(),
            end_date: "1835".to_string(),
            gpa: "4.0".to_string(),
            description: "Studied under De Morgan".to_string(),
        }];
        resume.skills = vec![
            Skill {
                id: Uuid::new_v4(),
                name: "JS".to_string(),
                category: "Technical".to_string(),
            },
            Skill {
                id: Uuid::new_v4(),
                name: "Spanish".to_string(),
                category: "Languages".to_string(),
            },
            Skill {
                id: Uuid::new_v4(),
                name: "Go".to_string(),
                category: "Technical".to_string(),
            },
        ];
        resume
    }

    fn with_template(mut resume: Resume, tag: &str) -> Resume {
        resume.template = TemplateTag::new(tag);
        resume
    }

    #[test]
    fn test_resolve_known_tags() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::resolve(kind.tag()), kind);
        }
    }

    #[test]
    fn test_resolve_unknown_or_empty_is_modern() {
        assert_eq!(TemplateKind::resolve(""), TemplateKind::Modern);
        assert_eq!(TemplateKind::resolve("Classic"), TemplateKind::Modern);
        assert_eq!(TemplateKind::resolve("brutalist"), TemplateKind::Modern);
    }

    #[test]
    fn test_every_kind_has_its_own_renderer() {
        let resume = full_resume();
        for kind in TemplateKind::ALL {
            let doc = render(&with_template(resume.clone(), kind.tag()));
            assert_eq!(doc.template, kind);
        }
    }

    #[test]
    fn test_unknown_template_renders_exactly_like_modern() {
        let resume = full_resume();
        let unknown = render(&with_template(resume.clone(), "holographic"));
        let modern = render(&with_template(resume, "modern"));
        assert_eq!(unknown, modern);
    }

    #[test]
    fn test_all_variants_select_identical_content() {
        let resume = full_resume();
        let baseline = printed_content(&render(&with_template(resume.clone(), "modern")));
        for kind in TemplateKind::ALL {
            let doc = render(&with_template(resume.clone(), kind.tag()));
            assert_eq!(
                printed_content(&doc),
                baseline,
                "{} selected different content",
                kind.tag()
            );
        }
    }

    #[test]
    fn test_empty_lists_render_header_and_summary_only() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Grace Hopper".to_string();
        resume.personal_info.summary = "Admiral.".to_string();

        for kind in TemplateKind::ALL {
            let doc = render(&with_template(resume.clone(), kind.tag()));
            assert_eq!(doc.header.name, "Grace Hopper");
            assert_eq!(doc.section_kinds(), vec![SectionKind::Summary]);
        }
    }

    #[test]
    fn test_blank_resume_renders_only_placeholder_header() {
        let doc = render(&Resume::default());
        assert_eq!(doc.header.name, "Your Name");
        assert!(doc.header.contacts.is_empty());
        assert!(doc.header.title.is_none());
        assert!(doc.header.photo.is_none());
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_sections_follow_standard_order() {
        let doc = render(&with_template(full_resume(), "classic"));
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills
            ]
        );
    }

    #[test]
    fn test_entries_keep_list_order_without_sorting() {
        let doc = render(&full_resume());
        let content = printed_content(&doc);
        let programmer = content.iter().position(|s| s == "Programmer");
        let translator = content.iter().position(|s| s == "Translator");
        assert!(programmer < translator, "1842 entry stays before 1840 entry");
        assert!(content.contains(&"1842 - Present".to_string()));
        assert!(content.contains(&"Technical: JS, Go".to_string()));
        assert!(content.contains(&"Languages: Spanish".to_string()));
    }

    #[test]
    fn test_render_is_deterministic() {
        let resume = with_template(full_resume(), "creative");
        assert_eq!(render(&resume), render(&resume));
    }
}
