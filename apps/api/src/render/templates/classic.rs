//! Classic: traditional and formal. Centered header, contacts on one line
//! joined by bullets, ruled uppercase headings, justified text.

use crate::models::resume::Resume;
use crate::render::document::{
    Background, ContactStyle, Document, EntryLayout, FontWeight, HeaderLayout, HeadingStyle,
    LetterSpacing, PageFormat, PhotoPlacement, Rule, SkillLayout, Theme,
};
use crate::render::templates::{compose, Composition, Headings, PhotoFrame, STANDARD_ORDER};
use crate::render::view::ResumeView;
use crate::render::TemplateKind;

const INK: &str = "#111827";

const LAYOUT: Composition = Composition {
    template: TemplateKind::Classic,
    page: PageFormat::a4(8),
    theme: Theme {
        font_family: "Georgia, serif",
        text_color: "#1f2937",
        muted_color: "#374151",
        accent_color: INK,
        background: Background::Solid { color: "#ffffff" },
        heading: HeadingStyle {
            size_pt: 18,
            weight: FontWeight::Bold,
            uppercase: true,
            letter_spacing: LetterSpacing::Normal,
            color: INK,
            rule: Rule::Underline {
                width_px: 1,
                color: "#d1d5db",
            },
        },
    },
    header: HeaderLayout {
        centered: true,
        name_size_pt: 30,
        name_weight: FontWeight::Bold,
        name_color: INK,
        accent_bar: None,
        contacts: ContactStyle::Joined { separator: " • " },
    },
    photo: PhotoFrame {
        placement: PhotoPlacement::AboveName,
        size_px: 96,
        round: false,
        border_color: Some("#1f2937"),
    },
    headings: Headings {
        summary: Some("Professional Summary"),
        experience: "Professional Experience",
        education: "Education",
        skills: "Skills",
    },
    justify_text: true,
    entry_layout: EntryLayout::TwoLine,
    skill_layout: SkillLayout::Lines,
    order: STANDARD_ORDER,
};

pub fn render(resume: &Resume) -> Document {
    compose(ResumeView::select(resume), &LAYOUT)
}
