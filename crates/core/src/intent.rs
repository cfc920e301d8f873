//! Semantic intent: the structured classification of a project description.
//!
//! A [`Classifier`] maps raw text to a [`SemanticIntent`]. Classification is
//! total: text that matches nothing still yields a fully populated intent
//! (`unknown` category, `professional` tone, no features).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of site being requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RealEstate,
    Ecommerce,
    Blog,
    Corporate,
    #[default]
    Unknown,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::RealEstate,
        Category::Ecommerce,
        Category::Blog,
        Category::Corporate,
        Category::Unknown,
    ];

    /// The wire name, e.g. `"real_estate"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::RealEstate => "real_estate",
            Category::Ecommerce => "ecommerce",
            Category::Blog => "blog",
            Category::Corporate => "corporate",
            Category::Unknown => "unknown",
        }
    }

    /// Parse a wire name. Returns `None` for anything unmapped.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The visual tone of the requested site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Playful,
    Minimalist,
    Bold,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Playful => "playful",
            Tone::Minimalist => "minimalist",
            Tone::Bold => "bold",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured classification of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticIntent {
    pub category: Category,
    pub tone: Tone,
    /// Feature tags in detection order, without duplicates.
    #[serde(default)]
    pub features: Vec<String>,
}

impl SemanticIntent {
    pub fn new(category: Category, tone: Tone) -> Self {
        Self {
            category,
            tone,
            features: Vec::new(),
        }
    }

    /// Add a feature tag. Tags already present are ignored.
    pub fn add_feature(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.features.contains(&tag) {
            self.features.push(tag);
        }
    }
}

/// A strategy that classifies free text into a [`SemanticIntent`].
///
/// Implementations must be total: every input yields an intent.
pub trait Classifier: Send + Sync {
    /// Strategy name (e.g., "keyword").
    fn name(&self) -> &str;

    /// Classify the given text.
    fn classify(&self, text: &str) -> SemanticIntent;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intent_is_unknown_professional() {
        let intent = SemanticIntent::default();
        assert_eq!(intent.category, Category::Unknown);
        assert_eq!(intent.tone, Tone::Professional);
        assert!(intent.features.is_empty());
    }

    #[test]
    fn features_are_deduplicated() {
        let mut intent = SemanticIntent::default();
        intent.add_feature("map-integration");
        intent.add_feature("advanced-search");
        intent.add_feature("map-integration");
        assert_eq!(intent.features, vec!["map-integration", "advanced-search"]);
    }

    #[test]
    fn category_names_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("unmapped_category"), None);
    }

    #[test]
    fn intent_serializes_snake_case() {
        let intent = SemanticIntent::new(Category::RealEstate, Tone::Minimalist);
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["category"], "real_estate");
        assert_eq!(json["tone"], "minimalist");
        assert_eq!(json["features"], serde_json::json!([]));
    }
}
