//! Professional: elegant and refined. Round photo beside a navy name, links
//! shown by caption, divided entries and a two-column skills grid.

use crate::models::resume::Resume;
use crate::render::document::{
    Background, ContactStyle, Document, EntryLayout, FontWeight, HeaderLayout, HeadingStyle,
    LetterSpacing, PageFormat, PhotoPlacement, Rule, SkillLayout, Theme,
};
use crate::render::templates::{compose, Composition, Headings, PhotoFrame, STANDARD_ORDER};
use crate::render::view::ResumeView;
use crate::render::TemplateKind;

const NAVY: &str = "#1e40af";

const LAYOUT: Composition = Composition {
    template: TemplateKind::Professional,
    page: PageFormat::a4(10),
    theme: Theme {
        font_family: "Inter, sans-serif",
        text_color: "#111827",
        muted_color: "#4b5563",
        accent_color: NAVY,
        background: Background::Solid { color: "#f9fafb" },
        heading: HeadingStyle {
            size_pt: 18,
            weight: FontWeight::Semibold,
            uppercase: true,
            letter_spacing: LetterSpacing::Wide,
            color: NAVY,
            rule: Rule::None,
        },
    },
    header: HeaderLayout {
        centered: false,
        name_size_pt: 36,
        name_weight: FontWeight::Bold,
        name_color: "#1e3a8a",
        accent_bar: None,
        contacts: ContactStyle::IconsWithLinkLabels,
    },
    photo: PhotoFrame {
        placement: PhotoPlacement::BesideNameLeft,
        size_px: 100,
        round: true,
        border_color: Some(NAVY),
    },
    headings: Headings {
        summary: Some("Professional Summary"),
        experience: "Work Experience",
        education: "Education",
        skills: "Skills",
    },
    justify_text: false,
    entry_layout: EntryLayout::Divided,
    skill_layout: SkillLayout::Grid { columns: 2 },
    order: STANDARD_ORDER,
};

pub fn render(resume: &Resume) -> Document {
    compose(ResumeView::select(resume), &LAYOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_frames_photo_round_on_the_left() {
        let mut resume = Resume::default();
        resume.personal_info.photo = "https://img.example/ada.png".to_string();
        let doc = render(&resume);
        let photo = doc.header.photo.expect("photo present");
        assert_eq!(photo.placement, PhotoPlacement::BesideNameLeft);
        assert!(photo.round);
        assert_eq!(photo.size_px, 100);
    }
}
