//! Project catalog - the immutable, ordered list of showcased projects

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building or querying the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("project not found: {id}")]
    NotFound { id: String },

    #[error("duplicate project id: {id}")]
    DuplicateId { id: String },

    #[error("project '{id}' has no images")]
    EmptyImages { id: String },
}

/// A single showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub tech_tags: Vec<String>,
    #[serde(default)]
    pub repository_link: String,
}

impl ProjectRecord {
    /// First image, used as the card cover
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Tags shown on a card, plus how many were left out
    pub fn card_tags(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tech_tags.len().min(limit);
        (&self.tech_tags[..shown], self.tech_tags.len() - shown)
    }
}

/// Ordered, read-only collection of projects with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and projects without images
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: project.id.clone(),
                });
            }
            if project.images.is_empty() {
                return Err(CatalogError::EmptyImages {
                    id: project.id.clone(),
                });
            }
        }
        Ok(Self { projects })
    }

    /// All projects in display order
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn by_id(&self, id: &str) -> Result<&ProjectRecord, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn project(id: &str, image_count: usize) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: id.to_uppercase(),
        category: "Web".to_string(),
        description: format!("{} description", id),
        images: (1..=image_count)
            .map(|i| format!("/projects/{}-{}.png", id, i))
            .collect(),
        tech_tags: vec!["Rust".to_string()],
        repository_link: format!("https://example.com/{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            project("drconnect", 4),
            project("easymanage", 3),
            project("autopart", 2),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["drconnect", "easymanage", "autopart"]);
    }

    #[test]
    fn test_by_id_finds_project() {
        let catalog = Catalog::new(vec![project("drconnect", 4), project("autopart", 2)]).unwrap();

        let found = catalog.by_id("autopart").unwrap();
        assert_eq!(found.images.len(), 2);
    }

    #[test]
    fn test_by_id_unknown_is_not_found() {
        let catalog = Catalog::new(vec![project("autopart", 2)]).unwrap();

        assert_eq!(
            catalog.by_id("missing"),
            Err(CatalogError::NotFound {
                id: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![project("autopart", 2), project("autopart", 1)]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateId {
                id: "autopart".to_string()
            }
        );
    }

    #[test]
    fn test_project_without_images_rejected() {
        let result = Catalog::new(vec![project("empty", 0)]);
        assert!(matches!(result, Err(CatalogError::EmptyImages { .. })));
    }

    #[test]
    fn test_card_tags_reports_hidden_count() {
        let mut p = project("drconnect", 1);
        p.tech_tags = ["Flutter", "Dart", "Firebase", "NoSQL", "Cloud Functions"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let (shown, hidden) = p.card_tags(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);

        let solo = project("autopart", 1);
        let (shown, hidden) = solo.card_tags(3);
        assert_eq!(shown.len(), 1);
        assert_eq!(hidden, 0);
    }
}
