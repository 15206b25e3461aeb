//! Minimalist: clean and simple. Light oversized name, small-caps headings,
//! an unlabelled summary and a date column beside each entry.

use crate::models::resume::Resume;
use crate::render::document::{
    Background, ContactStyle, Document, EntryLayout, FontWeight, HeaderLayout, HeadingStyle,
    LetterSpacing, PageFormat, PhotoPlacement, Rule, SkillLayout, Theme,
};
use crate::render::templates::{compose, Composition, Headings, PhotoFrame, STANDARD_ORDER};
use crate::render::view::ResumeView;
use crate::render::TemplateKind;

const LAYOUT: Composition = Composition {
    template: TemplateKind::Minimalist,
    page: PageFormat::a4(8),
    theme: Theme {
        font_family: "Helvetica Neue, Arial, sans-serif",
        text_color: "#374151",
        muted_color: "#4b5563",
        accent_color: "#6b7280",
        background: Background::Solid { color: "#ffffff" },
        heading: HeadingStyle {
            size_pt: 12,
            weight: FontWeight::Semibold,
            uppercase: true,
            letter_spacing: LetterSpacing::Widest,
            color: "#6b7280",
            rule: Rule::None,
        },
    },
    header: HeaderLayout {
        centered: false,
        name_size_pt: 48,
        name_weight: FontWeight::Light,
        name_color: "#111827",
        accent_bar: None,
        contacts: ContactStyle::SplitLinks,
    },
    photo: PhotoFrame {
        placement: PhotoPlacement::BesideNameLeft,
        size_px: 72,
        round: false,
        border_color: None,
    },
    headings: Headings {
        summary: None,
        experience: "Experience",
        education: "Education",
        skills: "Skills",
    },
    justify_text: false,
    entry_layout: EntryLayout::DateColumn,
    skill_layout: SkillLayout::Lines,
    order: STANDARD_ORDER,
};

pub fn render(resume: &Resume) -> Document {
    compose(ResumeView::select(resume), &LAYOUT)
}
