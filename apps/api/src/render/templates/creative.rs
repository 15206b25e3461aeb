//! Creative: vibrant and artistic. Pink/blue gradient page, Poppins, round
//! photo, underlined pink headings and skills as pills under each category.

use crate::models::resume::Resume;
use crate::render::document::{
    Background, ContactStyle, Document, EntryLayout, FontWeight, HeaderLayout, HeadingStyle,
    LetterSpacing, PageFormat, PhotoPlacement, Rule, SkillLayout, Theme,
};
use crate::render::templates::{compose, Composition, Headings, PhotoFrame, STANDARD_ORDER};
use crate::render::view::ResumeView;
use crate::render::TemplateKind;

const PINK: &str = "#be185d";

const LAYOUT: Composition = Composition {
    template: TemplateKind::Creative,
    page: PageFormat::a4(10),
    theme: Theme {
        font_family: "Poppins, sans-serif",
        text_color: "#1f2937",
        muted_color: "#4b5563",
        accent_color: PINK,
        background: Background::Gradient {
            from: "#fdf2f8",
            to: "#eff6ff",
        },
        heading: HeadingStyle {
            size_pt: 20,
            weight: FontWeight::Semibold,
            uppercase: false,
            letter_spacing: LetterSpacing::Normal,
            color: PINK,
            rule: Rule::Underline {
                width_px: 2,
                color: "#f9a8d4",
            },
        },
    },
    header: HeaderLayout {
        centered: false,
        name_size_pt: 36,
        name_weight: FontWeight::Extrabold,
        name_color: PINK,
        accent_bar: None,
        contacts: ContactStyle::IconsWithLinkLabels,
    },
    photo: PhotoFrame {
        placement: PhotoPlacement::BesideNameLeft,
        size_px: 90,
        round: true,
        border_color: Some("#ec4899"),
    },
    headings: Headings {
        summary: Some("Professional Summary"),
        experience: "Work Experience",
        education: "Education",
        skills: "Skills",
    },
    justify_text: false,
    entry_layout: EntryLayout::TwoLine,
    skill_layout: SkillLayout::Chips {
        fill: "#fbcfe8",
        text: "#9d174d",
    },
    order: STANDARD_ORDER,
};

pub fn render(resume: &Resume) -> Document {
    compose(ResumeView::select(resume), &LAYOUT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Skill;
    use crate::render::document::{SectionBody, SectionKind};
    use uuid::Uuid;

    #[test]
    fn test_creative_chips_still_grouped_by_category() {
        let mut resume = Resume::default();
        resume.skills = vec![
            Skill {
                id: Uuid::new_v4(),
                name: "Figma".to_string(),
                category: "Tools".to_string(),
            },
            Skill {
                id: Uuid::new_v4(),
                name: "French".to_string(),
                category: "Languages".to_string(),
            },
        ];
        let doc = render(&resume);
        let skills = doc.section(SectionKind::Skills).expect("skills present");
        match &skills.body {
            SectionBody::Skills { layout, groups } => {
                assert!(matches!(layout, SkillLayout::Chips { .. }));
                assert_eq!(groups.len(), 2);
                assert_eq!(groups[0].category, "Tools");
            }
            other => panic!("unexpected skills body: {other:?}"),
        }
        assert!(matches!(doc.theme.background, Background::Gradient { .. }));
    }
}
