//! The five layouts. Each one is a `Composition`: pure styling applied to the
//! same `ResumeView`. None of them looks at the `Resume` directly.

pub mod classic;
pub mod creative;
pub mod minimalist;
pub mod modern;
pub mod professional;

use crate::render::document::{
    Document, EntryLayout, Header, HeaderLayout, PageFormat, Photo, PhotoPlacement, Section,
    SectionBody, SectionKind, SkillLayout, Theme,
};
use crate::render::view::ResumeView;
use crate::render::TemplateKind;

/// Summary, experience, education, skills. Every layout currently uses it.
pub(crate) const STANDARD_ORDER: [SectionKind; 4] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
];

pub(crate) struct Headings {
    pub summary: Option<&'static str>,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
}

pub(crate) struct PhotoFrame {
    pub placement: PhotoPlacement,
    pub size_px: u16,
    pub round: bool,
    pub border_color: Option<&'static str>,
}

pub(crate) struct Composition {
    pub template: TemplateKind,
    pub page: PageFormat,
    pub theme: Theme,
    pub header: HeaderLayout,
    pub photo: PhotoFrame,
    pub headings: Headings,
    pub justify_text: bool,
    pub entry_layout: EntryLayout,
    pub skill_layout: SkillLayout,
    pub order: [SectionKind; 4],
}

pub(crate) fn compose(view: ResumeView, layout: &Composition) -> Document {
    let ResumeView {
        name,
        title,
        photo,
        contacts,
        summary,
        experience,
        education,
        skills,
    } = view;

    let header = Header {
        name,
        title,
        photo: photo.map(|source| Photo {
            source,
            placement: layout.photo.placement,
            size_px: layout.photo.size_px,
            round: layout.photo.round,
            border_color: layout.photo.border_color,
        }),
        contacts,
        layout: layout.header,
    };

    let mut summary = summary.map(|text| SectionBody::Paragraph {
        text,
        justified: layout.justify_text,
    });
    let mut experience = experience.map(|entries| SectionBody::Entries {
        layout: layout.entry_layout,
        entries,
    });
    let mut education = education.map(|entries| SectionBody::Entries {
        layout: layout.entry_layout,
        entries,
    });
    let mut skills = skills.map(|groups| SectionBody::Skills {
        layout: layout.skill_layout,
        groups,
    });

    let sections = layout
        .order
        .iter()
        .filter_map(|kind| {
            let (heading, body) = match kind {
                SectionKind::Summary => (layout.headings.summary, summary.take()),
                SectionKind::Experience => (Some(layout.headings.experience), experience.take()),
                SectionKind::Education => (Some(layout.headings.education), education.take()),
                SectionKind::Skills => (Some(layout.headings.skills), skills.take()),
            };
            body.map(|body| Section {
                kind: *kind,
                heading: heading.map(str::to_string),
                body,
            })
        })
        .collect();

    Document {
        template: layout.template,
        page: layout.page,
        theme: layout.theme,
        header,
        sections,
    }
}

/// Flattens a document's printed text, in reading order.
#[cfg(test)]
pub(crate) fn printed_content(doc: &Document) -> Vec<String> {
    let mut out = vec![doc.header.name.clone()];
    out.extend(doc.header.title.clone());
    out.extend(doc.header.photo.as_ref().map(|p| p.source.clone()));
    out.extend(doc.header.contacts.iter().map(|c| c.value.clone()));
    for section in &doc.sections {
        match &section.body {
            SectionBody::Paragraph { text, .. } => out.extend(text.lines.clone()),
            SectionBody::Entries { entries, .. } => {
                for entry in entries {
                    out.push(entry.title.clone());
                    out.push(entry.subtitle.clone());
                    out.push(entry.period.label());
                    out.extend(entry.location.clone());
                    out.extend(entry.note.clone());
                    out.extend(entry.body.iter().flat_map(|p| p.lines.clone()));
                }
            }
            SectionBody::Skills { groups, .. } => {
                out.extend(groups.iter().map(SkillLayout::line));
            }
        }
    }
    out
}
