//! Skill grouping, recomputed on every render.
//!
//! The literal `category` string is the key, so "Technical" and "technical"
//! land in different groups. Groups appear in first-seen order and names keep
//! list order within a group.

use serde::{Deserialize, Serialize};

use crate::models::resume::Skill;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub names: Vec<String>,
}

pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    skills.iter().fold(Vec::new(), |mut groups: Vec<SkillGroup>, skill| {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.names.push(skill.name.clone()),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                names: vec![skill.name.clone()],
            }),
        }
        groups
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_groups_keep_first_seen_and_insertion_order() {
        let skills = vec![
            skill("JS", "Technical"),
            skill("Spanish", "Languages"),
            skill("Go", "Technical"),
        ];
        let groups = group_by_category(&skills);
        assert_eq!(
            groups,
            vec![
                SkillGroup {
                    category: "Technical".to_string(),
                    names: vec!["JS".to_string(), "Go".to_string()],
                },
                SkillGroup {
                    category: "Languages".to_string(),
                    names: vec!["Spanish".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_category_key_is_literal() {
        let skills = vec![
            skill("Rust", "Technical"),
            skill("Zig", "technical"),
            skill("C", "Technical "),
        ];
        let groups = group_by_category(&skills);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].category, "technical");
    }

    #[test]
    fn test_empty_skills_group_to_nothing() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_blank_names_are_kept() {
        let groups = group_by_category(&[skill("", "Tools"), skill("git", "Tools")]);
        assert_eq!(groups[0].names, vec!["".to_string(), "git".to_string()]);
    }
}
