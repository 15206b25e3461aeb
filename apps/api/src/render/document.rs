//! The rendered document: a medium-independent tree of header and sections.
//!
//! Content (names, entries, skill groups) comes from `render::view`; the
//! styling fields (theme, layouts, placements) are what a template decides.
//! An exporter turns this into pixels or paper; nothing here knows how.

use serde::Serialize;

use crate::render::grouping::SkillGroup;
use crate::render::TemplateKind;

/// Placeholder shown when the name field is blank.
pub const NAME_PLACEHOLDER: &str = "Your Name";
/// Shown in place of a blank end date on work experience.
pub const PRESENT_MARKER: &str = "Present";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub template: TemplateKind,
    pub page: PageFormat,
    pub theme: Theme,
    pub header: Header,
    pub sections: Vec<Section>,
}

#[cfg(test)]
impl Document {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

/// One conceptual physical page. Content longer than this simply flows on;
/// overflow is not measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageFormat {
    pub width_mm: u16,
    pub min_height_mm: u16,
    pub padding_mm: u8,
}

impl PageFormat {
    pub const fn a4(padding_mm: u8) -> Self {
        Self {
            width_mm: 210,
            min_height_mm: 297,
            padding_mm,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Styling
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub font_family: &'static str,
    pub text_color: &'static str,
    pub muted_color: &'static str,
    pub accent_color: &'static str,
    pub background: Background,
    pub heading: HeadingStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    Solid { color: &'static str },
    Gradient { from: &'static str, to: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadingStyle {
    pub size_pt: u8,
    pub weight: FontWeight,
    pub uppercase: bool,
    pub letter_spacing: LetterSpacing,
    pub color: &'static str,
    pub rule: Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Semibold,
    Bold,
    Extrabold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterSpacing {
    Normal,
    Wide,
    Widest,
}

/// Line drawn under a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    None,
    Underline { width_px: u8, color: &'static str },
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub title: Option<String>,
    pub photo: Option<Photo>,
    pub contacts: Vec<Contact>,
    pub layout: HeaderLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub source: String,
    pub placement: PhotoPlacement,
    pub size_px: u16,
    pub round: bool,
    pub border_color: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoPlacement {
    BesideNameLeft,
    BesideNameRight,
    AboveName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Website,
}

impl ContactKind {
    pub fn is_link(&self) -> bool {
        matches!(
            self,
            ContactKind::Linkedin | ContactKind::Github | ContactKind::Website
        )
    }

    /// Short caption used when a layout shows links by name instead of URL.
    pub fn link_label(&self) -> Option<&'static str> {
        match self {
            ContactKind::Linkedin => Some("LinkedIn"),
            ContactKind::Github => Some("GitHub"),
            ContactKind::Website => Some("Website"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderLayout {
    pub centered: bool,
    pub name_size_pt: u8,
    pub name_weight: FontWeight,
    pub name_color: &'static str,
    /// Vertical accent bar to the left of the header block.
    pub accent_bar: Option<&'static str>,
    pub contacts: ContactStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactStyle {
    /// One wrapped row, each item with its icon, URLs shown verbatim.
    Icons,
    /// One line of plain text joined by `separator`.
    Joined { separator: &'static str },
    /// Plain contact details on one row, links on a second row.
    SplitLinks,
    /// Icons, with links shown by caption and the URL as target.
    IconsWithLinkLabels,
}

impl ContactStyle {
    /// What the contact reads as on the page under this style.
    pub fn display_text(&self, contact: &Contact) -> String {
        match (self, contact.kind.link_label()) {
            (ContactStyle::IconsWithLinkLabels, Some(label)) => label.to_string(),
            _ => contact.value.clone(),
        }
    }

    /// Contacts grouped into the rows this style prints.
    pub fn rows<'a>(&self, contacts: &'a [Contact]) -> Vec<Vec<&'a Contact>> {
        match self {
            ContactStyle::SplitLinks => {
                let (links, details): (Vec<&Contact>, Vec<&Contact>) =
                    contacts.iter().partition(|c| c.kind.is_link());
                [details, links]
                    .into_iter()
                    .filter(|row| !row.is_empty())
                    .collect()
            }
            _ if contacts.is_empty() => Vec::new(),
            _ => vec![contacts.iter().collect()],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// `None` renders the body without a heading line.
    pub heading: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph {
        text: Paragraph,
        justified: bool,
    },
    Entries {
        layout: EntryLayout,
        entries: Vec<Entry>,
    },
    Skills {
        layout: SkillLayout,
        groups: Vec<SkillGroup>,
    },
}

/// Text whose line breaks are semantic. Each element is one printed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub lines: Vec<String>,
}

impl Paragraph {
    /// Splits on newlines without reflowing.
    pub fn with_breaks(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect(),
        }
    }

    pub fn single(text: &str) -> Self {
        Self {
            lines: vec![text.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: String,
    pub period: Period,
    pub location: Option<String>,
    pub note: Option<String>,
    pub body: Option<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

impl Period {
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryLayout {
    /// Title and subtitle on the left, period and location right-aligned.
    SideBySide,
    /// Title and period on one line, subtitle and location on the next.
    TwoLine,
    /// A narrow date column next to the entry body.
    DateColumn,
    /// Like `SideBySide`, with a divider under each entry.
    Divided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkillLayout {
    /// "Category: a, b, c" per line.
    Lines,
    /// Category lines arranged in `columns` columns.
    Grid { columns: u8 },
    /// Category caption followed by a pill per skill.
    Chips { fill: &'static str, text: &'static str },
}

impl SkillLayout {
    /// The "Category: a, b" line every list-style layout prints.
    pub fn line(group: &SkillGroup) -> String {
        format!("{}: {}", group.category, group.names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(kind: ContactKind, value: &str) -> Contact {
        Contact {
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_paragraph_keeps_line_breaks() {
        let p = Paragraph::with_breaks("• Led team\n• Shipped v2\r\n\n• On call");
        assert_eq!(p.lines, vec!["• Led team", "• Shipped v2", "", "• On call"]);
    }

    #[test]
    fn test_period_label() {
        let period = Period {
            start: "2020".to_string(),
            end: PRESENT_MARKER.to_string(),
        };
        assert_eq!(period.label(), "2020 - Present");
    }

    #[test]
    fn test_split_links_puts_links_on_second_row() {
        let contacts = vec![
            contact(ContactKind::Email, "a@b.c"),
            contact(ContactKind::Linkedin, "in/ada"),
            contact(ContactKind::Phone, "555"),
        ];
        let rows = ContactStyle::SplitLinks.rows(&contacts);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1][0].kind, ContactKind::Linkedin);
    }

    #[test]
    fn test_split_links_without_links_is_one_row() {
        let contacts = vec![contact(ContactKind::Email, "a@b.c")];
        assert_eq!(ContactStyle::SplitLinks.rows(&contacts).len(), 1);
        assert!(ContactStyle::Icons.rows(&[]).is_empty());
    }

    #[test]
    fn test_link_labels_only_replace_links() {
        let style = ContactStyle::IconsWithLinkLabels;
        assert_eq!(
            style.display_text(&contact(ContactKind::Github, "https://github.com/ada")),
            "GitHub"
        );
        assert_eq!(style.display_text(&contact(ContactKind::Phone, "555")), "555");
        assert_eq!(
            ContactStyle::Icons.display_text(&contact(ContactKind::Website, "ada.dev")),
            "ada.dev"
        );
    }

    #[test]
    fn test_skill_line_joins_names() {
        let group = SkillGroup {
            category: "Technical".to_string(),
            names: vec!["Rust".to_string(), "Go".to_string()],
        };
        assert_eq!(SkillLayout::line(&group), "Technical: Rust, Go");
    }
}
