//! List mutation contract shared by work experience, education and skills.
//!
//! All operations are pure: they take the current list and return the
//! replacement list. The caller hands the result to `ResumeEditor`, which
//! swaps the whole collection in one step.
//!
//! - `add` appends, never inserts, and always assigns a fresh id.
//! - `update` touches only the entry with the matching id; position is kept.
//! - `remove` drops the matching entry and keeps the relative order of the rest.
//! - `update` and `remove` with an unknown id return an equal list.
//! - `invalid_id` finds the nil or repeated id that makes a list unusable.

use std::collections::HashSet;
use std::fmt::Debug;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{default_category, Education, Skill, SkillCategory, WorkExperience};

/// An element of one of the aggregate's ordered lists.
pub trait ListEntry: Clone + Default {
    /// Typed selector for the text fields `update` may replace.
    type Field: Copy + Debug + DeserializeOwned;

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    fn set_field(&mut self, field: Self::Field, value: String);
}

/// Appends `defaults` with a freshly generated id. Whatever id `defaults`
/// carried is overwritten.
pub fn add<E: ListEntry>(list: &[E], mut defaults: E) -> Vec<E> {
    defaults.set_id(fresh_id(list));
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(defaults);
    next
}

/// Appends a blank entry.
pub fn add_blank<E: ListEntry>(list: &[E]) -> Vec<E> {
    add(list, E::default())
}

pub fn update<E: ListEntry>(list: &[E], id: Uuid, field: E::Field, value: &str) -> Vec<E> {
    list.iter()
        .map(|entry| {
            if entry.id() == id {
                let mut changed = entry.clone();
                changed.set_field(field, value.to_string());
                changed
            } else {
                entry.clone()
            }
        })
        .collect()
}

pub fn remove<E: ListEntry>(list: &[E], id: Uuid) -> Vec<E> {
    list.iter().filter(|entry| entry.id() != id).cloned().collect()
}

pub fn contains<E: ListEntry>(list: &[E], id: Uuid) -> bool {
    list.iter().any(|entry| entry.id() == id)
}

/// First id in `list` that is nil or already used by an earlier entry.
pub fn invalid_id<E: ListEntry>(list: &[E]) -> Option<Uuid> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter()
        .map(ListEntry::id)
        .find(|id| id.is_nil() || !seen.insert(*id))
}

fn fresh_id<E: ListEntry>(list: &[E]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !id.is_nil() && !contains(list, id) {
            return id;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Position,
    Location,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    Location,
    StartDate,
    EndDate,
    Gpa,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillField {
    Name,
    Category,
}

// ────────────────────────────────────────────────────────────────────────────
// ListEntry impls
// ────────────────────────────────────────────────────────────────────────────

impl Default for WorkExperience {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl ListEntry for WorkExperience {
    type Field = ExperienceField;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn set_field(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::Location => &mut self.location,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value;
    }
}

impl Default for Education {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            institution: String::new(),
            degree: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: String::new(),
            description: String::new(),
        }
    }
}

impl ListEntry for Education {
    type Field = EducationField;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn set_field(&mut self, field: EducationField, value: String) {
        let slot = match field {
            EducationField::Institution => &mut self.institution,
            EducationField::Degree => &mut self.degree,
            EducationField::Location => &mut self.location,
            EducationField::StartDate => &mut self.start_date,
            EducationField::EndDate => &mut self.end_date,
            EducationField::Gpa => &mut self.gpa,
            EducationField::Description => &mut self.description,
        };
        *slot = value;
    }
}

impl Skill {
    /// A blank skill pre-filed under one of the offered categories.
    pub fn in_category(category: SkillCategory) -> Self {
        Self {
            category: category.label().to_string(),
            ..Self::default()
        }
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            name: String::new(),
            category: default_category(),
        }
    }
}

impl ListEntry for Skill {
    type Field = SkillField;

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn set_field(&mut self, field: SkillField, value: String) {
        match field {
            SkillField::Name => self.name = value,
            SkillField::Category => self.category = value,
        }
    }
}
