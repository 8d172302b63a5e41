//! TOML content catalog.
//!
//! Loads the static content tables (pages, resources, exercises, quiz
//! questions) once at startup and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{
    AboutPage, Exercise, HomePage, NutritionPage, Question, Resource, SiteInfo, TrainingPage,
    WellnessTip,
};

/// The catalog schema version this build understands.
pub const CATALOG_VERSION: u32 = 1;

/// The catalog shipped with the binary.
pub const DEFAULT_CATALOG: &str = include_str!("../content/site.toml");

/// All static content the site is rendered from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCatalog {
    /// Schema version of the source file.
    pub version: u32,
    pub site: SiteInfo,
    pub home: HomePage,
    pub nutrition: NutritionPage,
    pub training: TrainingPage,
    pub about: AboutPage,
    /// The quiz question bank, in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub wellness: Vec<WellnessTip>,
}

impl ContentCatalog {
    /// The embedded default catalog.
    pub fn builtin() -> Result<Self> {
        parse_catalog_str(DEFAULT_CATALOG, Path::new("<builtin>"))
    }

    /// Load from `path` if given, otherwise fall back to the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => parse_catalog(p),
            None => Self::builtin(),
        }
    }

    /// Look up a question by id.
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Parse a catalog file.
pub fn parse_catalog(path: &Path) -> Result<ContentCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content catalog: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a catalog from a TOML string and enforce the question bank invariants.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<ContentCatalog> {
    let catalog: ContentCatalog = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    anyhow::ensure!(
        catalog.version == CATALOG_VERSION,
        "unsupported catalog version {} in {} (expected {})",
        catalog.version,
        source_path.display(),
        CATALOG_VERSION
    );

    check_questions(&catalog.questions)
        .with_context(|| format!("invalid question bank in {}", source_path.display()))?;

    tracing::debug!(
        questions = catalog.questions.len(),
        resources = catalog.resources.len(),
        exercises = catalog.exercises.len(),
        "loaded content catalog from {}",
        source_path.display()
    );

    Ok(catalog)
}

/// Structural checks the quiz relies on. Violations are hard errors.
fn check_questions(questions: &[Question]) -> Result<()> {
    let mut seen_ids = HashSet::new();
    for q in questions {
        if !seen_ids.insert(q.id) {
            anyhow::bail!("duplicate question ID: {}", q.id);
        }
        if q.prompt.trim().is_empty() {
            anyhow::bail!("question {} has an empty prompt", q.id);
        }
        if q.options.len() < 2 {
            anyhow::bail!(
                "question {} needs at least 2 options, found {}",
                q.id,
                q.options.len()
            );
        }
        if !q.has_option(q.correct_option) {
            anyhow::bail!(
                "question {} marks option {} as correct but only has {} options",
                q.id,
                q.correct_option,
                q.options.len()
            );
        }
    }
    Ok(())
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Which table the warning is about (e.g. "resources").
    pub section: &'static str,
    /// The item ID (if applicable).
    pub item_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a parsed catalog for issues that don't prevent rendering.
pub fn validate_catalog(catalog: &ContentCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for r in &catalog.resources {
        if !seen.insert(r.id) {
            warnings.push(ValidationWarning {
                section: "resources",
                item_id: Some(r.id),
                message: format!("duplicate resource ID: {}", r.id),
            });
        }
        if !(r.url.starts_with("https://") || r.url.starts_with("http://")) {
            warnings.push(ValidationWarning {
                section: "resources",
                item_id: Some(r.id),
                message: format!("url is not an http(s) link: {}", r.url),
            });
        }
        if r.summary.trim().is_empty() {
            warnings.push(ValidationWarning {
                section: "resources",
                item_id: Some(r.id),
                message: "summary is empty".into(),
            });
        }
    }

    let mut seen = HashSet::new();
    for e in &catalog.exercises {
        if !seen.insert(e.id) {
            warnings.push(ValidationWarning {
                section: "exercises",
                item_id: Some(e.id),
                message: format!("duplicate exercise ID: {}", e.id),
            });
        }
    }

    for q in &catalog.questions {
        let mut options = HashSet::new();
        if q.options.iter().any(|o| !options.insert(o.trim())) {
            warnings.push(ValidationWarning {
                section: "questions",
                item_id: Some(q.id),
                message: "question has duplicate options".into(),
            });
        }
    }

    if catalog.questions.is_empty() {
        warnings.push(ValidationWarning {
            section: "questions",
            item_id: None,
            message: "question bank is empty; the nutrition quiz will not be shown".into(),
        });
    }

    warnings
}
