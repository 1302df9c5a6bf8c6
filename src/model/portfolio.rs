//! Portfolio content - everything shown around the project catalog

use super::catalog::ProjectRecord;
use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    /// Short availability badge, e.g. "Available for Hire"
    #[serde(default)]
    pub availability: Option<String>,
}

/// A named group of skills (Frontend, Backend, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One step of the education timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub period: String,
    pub title: String,
    pub school: String,
    #[serde(default)]
    pub description: String,
}

/// Contact links shown in the footer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactLinks {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl ContactLinks {
    /// Links as (label, target) pairs, skipping the missing ones
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(email) = &self.email {
            entries.push(("Email", format!("mailto:{}", email)));
        }
        if let Some(github) = &self.github {
            entries.push(("GitHub", github.clone()));
        }
        if let Some(linkedin) = &self.linkedin {
            entries.push(("LinkedIn", linkedin.clone()));
        }
        entries
    }
}

/// The full content document as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub owner: Owner,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Path or URL of the downloadable résumé
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub links: ContactLinks,
}

/// Content that is not part of the project catalog
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub owner: Owner,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<EducationEntry>,
    pub resume: Option<String>,
    pub links: ContactLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_entries_skip_missing() {
        let links = ContactLinks {
            email: Some("me@example.com".to_string()),
            github: None,
            linkedin: Some("https://linkedin.com/in/me".to_string()),
        };

        let entries = links.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("Email", "mailto:me@example.com".to_string()));
        assert_eq!(entries[1].0, "LinkedIn");
    }

    #[test]
    fn test_document_defaults_optional_sections() {
        let json = r#"{
            "owner": { "name": "Ada" },
            "projects": [ { "id": "a", "title": "A", "images": ["a.png"] } ]
        }"#;

        let doc: PortfolioDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.owner.name, "Ada");
        assert!(doc.skills.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.resume.is_none());
        assert_eq!(doc.projects[0].category, "");
    }
}
