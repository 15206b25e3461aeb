//! Plain-text print of a rendered `Document`.
//!
//! Reads the document only; a blank section never appears here because the
//! document never contains one.

use crate::render::document::{
    ContactStyle, Document, Entry, EntryLayout, Header, Paragraph, Section, SectionBody, SkillLayout,
};

const CONTACT_GAP: &str = "  |  ";

pub fn plain_text(doc: &Document) -> String {
    let mut out = Vec::new();
    header_lines(&doc.header, &mut out);
    for section in &doc.sections {
        out.push(String::new());
        section_lines(section, doc.theme.heading.uppercase, &mut out);
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn header_lines(header: &Header, out: &mut Vec<String>) {
    out.push(header.name.clone());
    out.extend(header.title.clone());

    let style = header.layout.contacts;
    let separator = match style {
        ContactStyle::Joined { separator } => separator,
        _ => CONTACT_GAP,
    };
    for row in style.rows(&header.contacts) {
        let items: Vec<String> = row.iter().map(|c| style.display_text(c)).collect();
        out.push(items.join(separator));
    }
}

fn section_lines(section: &Section, uppercase: bool, out: &mut Vec<String>) {
    if let Some(heading) = &section.heading {
        out.push(if uppercase {
            heading.to_uppercase()
        } else {
            heading.clone()
        });
    }

    match &section.body {
        SectionBody::Paragraph { text, .. } => paragraph_lines(text, out),
        SectionBody::Entries { layout, entries } => {
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(String::new());
                }
                entry_lines(entry, *layout, out);
            }
        }
        SectionBody::Skills { layout, groups } => {
            for group in groups {
                out.push(match layout {
                    SkillLayout::Chips { .. } => {
                        let chips: Vec<String> =
                            group.names.iter().map(|name| format!("[{name}]")).collect();
                        format!("{}: {}", group.category, chips.join(" "))
                    }
                    SkillLayout::Lines | SkillLayout::Grid { .. } => SkillLayout::line(group),
                });
            }
        }
    }
}

fn entry_lines(entry: &Entry, layout: EntryLayout, out: &mut Vec<String>) {
    let period = entry.period.label();
    let place = |subtitle: &str| match &entry.location {
        Some(location) => format!("{subtitle}, {location}"),
        None => subtitle.to_string(),
    };

    match layout {
        EntryLayout::SideBySide | EntryLayout::Divided => {
            out.push(format!("{}  ({period})", entry.title));
            out.push(place(&entry.subtitle));
        }
        EntryLayout::TwoLine => {
            out.push(format!("{}, {}", entry.title, entry.subtitle));
            out.push(match &entry.location {
                Some(location) => format!("{period}  {location}"),
                None => period,
            });
        }
        EntryLayout::DateColumn => {
            out.push(format!("{period}  {}", entry.title));
            out.push(format!("    {}", place(&entry.subtitle)));
        }
    }

    out.extend(entry.note.clone());
    if let Some(body) = &entry.body {
        paragraph_lines(body, out);
    }
    if layout == EntryLayout::Divided {
        out.push("-".repeat(40));
    }
}

fn paragraph_lines(paragraph: &Paragraph, out: &mut Vec<String>) {
    out.extend(paragraph.lines.iter().cloned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PersonalInfo, Resume, Skill, TemplateTag, WorkExperience};
    use crate::render::render;
    use uuid::Uuid;

    fn sample(template: &str) -> Resume {
        Resume {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555".to_string(),
                github: "https://github.com/ada".to_string(),
                summary: "Analyst.".to_string(),
                ..PersonalInfo::default()
            },
            work_experience: vec![WorkExperience {
                id: Uuid::new_v4(),
                company: "Initech".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020".to_string(),
                description: "• Led team\n• Shipped v2".to_string(),
                ..WorkExperience::default()
            }],
            skills: vec![
                Skill {
                    id: Uuid::new_v4(),
                    name: "Rust".to_string(),
                    category: "Technical".to_string(),
                },
                Skill {
                    id: Uuid::new_v4(),
                    name: "Go".to_string(),
                    category: "Technical".to_string(),
                },
            ],
            template: TemplateTag::new(template),
            ..Resume::default()
        }
    }

    #[test]
    fn test_modern_print() {
        let text = plain_text(&render(&sample("modern")));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ada Lovelace");
        assert_eq!(lines[1], "ada@example.com  |  555  |  https://github.com/ada");
        assert!(text.contains("Engineer  (2020 - Present)\nInitech\n• Led team\n• Shipped v2"));
        assert!(text.contains("Technical: Rust, Go"));
    }

    #[test]
    fn test_classic_joins_contacts_and_uppercases_when_styled() {
        let doc = render(&sample("classic"));
        let text = plain_text(&doc);
        assert!(text.contains("ada@example.com • 555"));
        if let Some(heading) = doc.sections.first().and_then(|s| s.heading.as_deref()) {
            let expected = if doc.theme.heading.uppercase {
                heading.to_uppercase()
            } else {
                heading.to_string()
            };
            assert!(text.lines().any(|line| line == expected));
        }
    }

    #[test]
    fn test_link_labels_and_chips() {
        let text = plain_text(&render(&sample("creative")));
        assert!(text.contains("GitHub"));
        assert!(!text.contains("https://github.com/ada"));
        assert!(text.contains("Technical: [Rust] [Go]"));
    }

    #[test]
    fn test_minimalist_puts_links_on_second_row() {
        let text = plain_text(&render(&sample("minimalist")));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "ada@example.com  |  555");
        assert_eq!(lines[2], "https://github.com/ada");
    }

    #[test]
    fn test_blank_resume_prints_placeholder_only() {
        assert_eq!(plain_text(&render(&Resume::default())), "Your Name\n");
    }
}
