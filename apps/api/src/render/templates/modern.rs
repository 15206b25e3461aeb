//! Modern: bold and colorful. Blue accent bar beside the header, icon
//! contacts, uppercase blue headings.

use crate::models::resume::Resume;
use crate::render::document::{
    Background, ContactStyle, Document, EntryLayout, FontWeight, HeaderLayout, HeadingStyle,
    LetterSpacing, PageFormat, PhotoPlacement, Rule, SkillLayout, Theme,
};
use crate::render::templates::{compose, Composition, Headings, PhotoFrame, STANDARD_ORDER};
use crate::render::view::ResumeView;
use crate::render::TemplateKind;

const ACCENT: &str = "#2563eb";

const LAYOUT: Composition = Composition {
    template: TemplateKind::Modern,
    page: PageFormat::a4(8),
    theme: Theme {
        font_family: "Inter, sans-serif",
        text_color: "#374151",
        muted_color: "#4b5563",
        accent_color: ACCENT,
        background: Background::Solid { color: "#ffffff" },
        heading: HeadingStyle {
            size_pt: 20,
            weight: FontWeight::Bold,
            uppercase: true,
            letter_spacing: LetterSpacing::Wide,
            color: ACCENT,
            rule: Rule::None,
        },
    },
    header: HeaderLayout {
        centered: false,
        name_size_pt: 36,
        name_weight: FontWeight::Bold,
        name_color: "#111827",
        accent_bar: Some(ACCENT),
        contacts: ContactStyle::Icons,
    },
    photo: PhotoFrame {
        placement: PhotoPlacement::BesideNameRight,
        size_px: 96,
        round: false,
        border_color: None,
    },
    headings: Headings {
        summary: Some("Summary"),
        experience: "Experience",
        education: "Education",
        skills: "Skills",
    },
    justify_text: false,
    entry_layout: EntryLayout::SideBySide,
    skill_layout: SkillLayout::Lines,
    order: STANDARD_ORDER,
};

pub fn render(resume: &Resume) -> Document {
    compose(ResumeView::select(resume), &LAYOUT)
}
