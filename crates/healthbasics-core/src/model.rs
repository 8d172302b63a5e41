//! Core data model types for Healthy Living Basics.
//!
//! These are the immutable content records every view is composed from.
//! They are loaded once from the content catalog and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single multiple-choice quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the question bank.
    pub id: u32,
    /// The question text shown to the user.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_option: usize,
}

impl Question {
    /// Returns `true` if `option_index` points at one of this question's options.
    pub fn has_option(&self, option_index: usize) -> bool {
        option_index < self.options.len()
    }

    /// Returns `true` if `option_index` is the correct answer.
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.correct_option == option_index
    }

    /// Text of the correct option.
    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct_option)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Category tag shown on a resource card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Nutrition,
    Health,
    Education,
    Heart,
    Research,
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceCategory::Nutrition => write!(f, "nutrition"),
            ResourceCategory::Health => write!(f, "health"),
            ResourceCategory::Education => write!(f, "education"),
            ResourceCategory::Heart => write!(f, "heart"),
            ResourceCategory::Research => write!(f, "research"),
        }
    }
}

/// An external reference linked from the resources page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub category: ResourceCategory,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: String,
}

/// A short routine listed on the exercise page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A titled paragraph on the wellness page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessTip {
    pub title: String,
    pub body: String,
}

/// Site-wide branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Short blurb shown in the footer.
    #[serde(default)]
    pub footer_blurb: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// A footer link to an external profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Copy for the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePage {
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: String,
}

/// Copy for the nutrition page. The quiz itself comes from the question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPage {
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default = "default_quiz_title")]
    pub quiz_title: String,
}

fn default_quiz_title() -> String {
    "Nutrition Quiz".to_string()
}

/// Copy for the training materials page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPage {
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub download_label: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub outline: Vec<String>,
}

/// Copy for the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPage {
    pub heading: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: 1,
            prompt: "Which is a whole grain option?".into(),
            options: vec!["White bread".into(), "Brown rice".into(), "Candy".into()],
            correct_option: 1,
        }
    }

    #[test]
    fn question_option_bounds() {
        let q = question();
        assert!(q.has_option(0));
        assert!(q.has_option(2));
        assert!(!q.has_option(3));
    }

    #[test]
    fn question_correctness() {
        let q = question();
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert_eq!(q.correct_text(), "Brown rice");
    }

    #[test]
    fn category_display_matches_serde_name() {
        assert_eq!(ResourceCategory::Heart.to_string(), "heart");
        let parsed: Resource = toml::from_str(
            r#"
id = 1
category = "research"
title = "NIH"
url = "https://www.nih.gov/"
"#,
        )
        .unwrap();
        assert_eq!(parsed.category, ResourceCategory::Research);
        assert!(parsed.summary.is_empty());
    }
}
