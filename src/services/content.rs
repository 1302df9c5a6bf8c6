//! Portfolio content loading
//!
//! Content is a single JSON document. Without a configured file the
//! document bundled into the binary is used.

use crate::model::portfolio::PortfolioDocument;
use crate::model::{Catalog, Profile};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BUILTIN_CONTENT: &str = include_str!("../../assets/portfolio.json");

/// Load the portfolio from `path`, or the built-in document when `None`
pub fn load_content(path: Option<&Path>) -> Result<(Catalog, Profile)> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file {}", path.display()))?;
            parse_content(&contents)
                .with_context(|| format!("Invalid content file {}", path.display()))
        }
        None => parse_content(BUILTIN_CONTENT).context("Invalid built-in content"),
    }
}

/// Parse a content document and split it into the catalog and the profile
pub fn parse_content(json: &str) -> Result<(Catalog, Profile)> {
    let document: PortfolioDocument =
        serde_json::from_str(json).context("Failed to parse portfolio JSON")?;

    let catalog = Catalog::new(document.projects)?;
    let profile = Profile {
        owner: document.owner,
        skills: document.skills,
        education: document.education,
        resume: document.resume,
        links: document.links,
    };

    tracing::info!(
        projects = catalog.len(),
        skills = profile.skills.len(),
        education = profile.education.len(),
        "portfolio content loaded"
    );

    Ok((catalog, profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::CatalogError;
    use std::io::Write;

    #[test]
    fn test_builtin_content_is_valid() {
        let (catalog, profile) = load_content(None).unwrap();

        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["drconnect", "easymanage", "autopart"]);
        assert_eq!(catalog.by_id("drconnect").unwrap().images.len(), 4);
        assert_eq!(catalog.by_id("autopart").unwrap().images.len(), 2);
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.education.len(), 2);
        assert!(profile.resume.is_some());
    }

    #[test]
    fn test_load_content_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "owner": {{ "name": "Ada" }},
                "projects": [
                    {{ "id": "engine", "title": "Engine", "images": ["a.png", "b.png"] }}
                ]
            }}"#
        )
        .unwrap();

        let (catalog, profile) = load_content(Some(file.path())).unwrap();
        assert_eq!(profile.owner.name, "Ada");
        assert_eq!(catalog.by_id("engine").unwrap().images.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_content(Some(&dir.path().join("missing.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_ids_fail_to_load() {
        let json = r#"{
            "owner": { "name": "Ada" },
            "projects": [
                { "id": "a", "title": "A", "images": ["a.png"] },
                { "id": "a", "title": "Again", "images": ["b.png"] }
            ]
        }"#;

        let err = parse_content(json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::DuplicateId { id: "a".to_string() })
        );
    }

    #[test]
    fn test_project_without_images_fails_to_load() {
        let json = r#"{
            "owner": { "name": "Ada" },
            "projects": [ { "id": "a", "title": "A", "images": [] } ]
        }"#;

        assert!(parse_content(json).is_err());
    }
}
