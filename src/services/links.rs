//! Opening links, images and the résumé with the system handler

use anyhow::{Context, Result};
use std::path::Path;

/// Whether `target` should be handed to the opener as-is
fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("mailto:")
}

/// Resolve a content reference against the asset root.
///
/// References such as `/projects/a.png` are relative to the site root, so the
/// leading slash is dropped before joining. URLs pass through untouched.
pub fn resolve_target(target: &str, asset_root: Option<&Path>) -> String {
    if is_url(target) {
        return target.to_string();
    }
    match asset_root {
        Some(root) => root
            .join(target.trim_start_matches('/'))
            .to_string_lossy()
            .to_string(),
        None => target.to_string(),
    }
}

/// Something that can hand a resolved link or path to the outside world
pub trait LinkOpener {
    fn open(&self, target: &str) -> Result<()>;
}

/// Opens targets with the platform's default handler
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        opener::open(target).with_context(|| format!("Failed to open {}", target))
    }
}

/// Resolve `target` and open it, returning what was opened
pub fn open_target(
    opener: &dyn LinkOpener,
    target: &str,
    asset_root: Option<&Path>,
) -> Result<String> {
    let resolved = resolve_target(target, asset_root);
    opener.open(&resolved)?;
    tracing::info!(target = %resolved, "opened external target");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for Recorder {
        fn open(&self, target: &str) -> Result<()> {
            self.opened.borrow_mut().push(target.to_string());
            Ok(())
        }
    }

    struct Failing;

    impl LinkOpener for Failing {
        fn open(&self, target: &str) -> Result<()> {
            anyhow::bail!("no handler for {}", target)
        }
    }

    #[test]
    fn test_open_target_passes_resolved_path() {
        let recorder = Recorder::default();
        let root = PathBuf::from("/srv/site");
        let opened = open_target(&recorder, "/cv.pdf", Some(&root)).unwrap();
        assert_eq!(opened, "/srv/site/cv.pdf");
        assert_eq!(*recorder.opened.borrow(), vec!["/srv/site/cv.pdf".to_string()]);
    }

    #[test]
    fn test_open_target_propagates_failure() {
        let err = open_target(&Failing, "https://example.com", None).unwrap_err();
        assert!(err.to_string().contains("no handler"));
    }

    #[test]
    fn test_urls_pass_through() {
        let root = PathBuf::from("/srv/site");
        assert_eq!(
            resolve_target("https://github.com/me", Some(&root)),
            "https://github.com/me"
        );
        assert_eq!(
            resolve_target("mailto:me@example.com", Some(&root)),
            "mailto:me@example.com"
        );
    }

    #[test]
    fn test_site_relative_paths_join_asset_root() {
        let root = PathBuf::from("/srv/site");
        assert_eq!(
            resolve_target("/projects/a.png", Some(&root)),
            "/srv/site/projects/a.png"
        );
        assert_eq!(resolve_target("cv.pdf", Some(&root)), "/srv/site/cv.pdf");
    }

    #[test]
    fn test_paths_without_root_are_unchanged() {
        assert_eq!(resolve_target("/projects/a.png", None), "/projects/a.png");
    }
}
