//! Embedded course content: sessions and their code listings.
//!
//! The manifest lives in `content/course.toml` and is compiled into the
//! binary, so the server render and the hydrated client agree on the DOM.

use std::sync::OnceLock;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

const MANIFEST: &str = include_str!("../content/course.toml");

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FileManifest {
    #[serde(default, rename = "session")]
    sessions: Vec<Session>,
}

// ── Public registry ───────────────────────────────────────────────────────────

/// One course session: a titled group of code listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default, rename = "listing")]
    pub listings: Vec<Listing>,
}

/// A single script shown as a copyable code block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listing {
    pub name: String,
    pub language: String,
    pub source: String,
}

#[derive(Debug)]
pub struct Course {
    pub sessions: Vec<Session>,
}

impl Course {
    /// Parse a manifest. Sessions keep manifest order; slugs must be unique.
    fn load(raw: &str) -> Result<Self> {
        let file: FileManifest = toml::from_str(raw).context("failed to parse course manifest")?;

        let mut seen = std::collections::HashSet::new();
        for session in &file.sessions {
            ensure!(
                seen.insert(session.slug.as_str()),
                "duplicate session slug: {}",
                session.slug
            );
            ensure!(
                !session.listings.is_empty(),
                "session {} has no listings",
                session.slug
            );
        }

        Ok(Self {
            sessions: file.sessions,
        })
    }

    pub fn session(&self, slug: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.slug == slug)
    }
}

static COURSE: OnceLock<Course> = OnceLock::new();

/// The course registry, parsed once from the embedded manifest.
pub fn course() -> &'static Course {
    COURSE.get_or_init(|| Course::load(MANIFEST).expect("embedded course manifest is invalid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_manifest_loads() {
        let course = course();
        assert!(!course.sessions.is_empty());
        for session in &course.sessions {
            assert!(!session.listings.is_empty(), "empty session {}", session.slug);
            for listing in &session.listings {
                assert!(!listing.source.trim().is_empty(), "empty listing {}", listing.name);
            }
        }
    }

    #[test]
    fn lookup_by_slug() {
        let course = course();
        let first = &course.sessions[0];
        assert_eq!(course.session(&first.slug), Some(first));
        assert_eq!(course.session("no-such-session"), None);
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let raw = r#"
            [[session]]
            slug = "a"
            title = "A"
            [[session.listing]]
            name = "x.py"
            language = "python"
            source = "print('x')"

            [[session]]
            slug = "a"
            title = "A again"
            [[session.listing]]
            name = "y.py"
            language = "python"
            source = "print('y')"
        "#;
        assert!(Course::load(raw).is_err());
    }

    #[test]
    fn sessions_without_listings_are_rejected() {
        let raw = r#"
            [[session]]
            slug = "empty"
            title = "Empty"
        "#;
        assert!(Course::load(raw).is_err());
    }
}
