//! Knowledge base: static catalog of recommended components per category.

use sitewright_core::intent::Category;
use std::collections::HashMap;

/// Returned for any category without a curated list.
pub const FALLBACK_COMPONENTS: [&str; 2] = ["General layout", "Standard navigation"];

/// Category-keyed catalog of site building blocks.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalog: HashMap<&'static str, Vec<&'static str>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        let catalog = HashMap::from([
            (
                Category::RealEstate.as_str(),
                vec!["Property listings", "Interactive maps", "Image galleries", "Agent contact forms"],
            ),
            (
                Category::Ecommerce.as_str(),
                vec!["Product grids", "Shopping carts", "Price tags", "Filter sidebars"],
            ),
            (
                Category::Corporate.as_str(),
                vec!["Hero banner", "Services overview", "Team profiles", "Contact section"],
            ),
        ]);
        Self { catalog }
    }

    /// Recommended components for a category name, in display order.
    ///
    /// Unmapped names (including `unknown` and `blog`) get the fallback pair.
    pub fn recommend(&self, category: &str) -> Vec<String> {
        self.catalog
            .get(category)
            .map(|items| items.as_slice())
            .unwrap_or(&FALLBACK_COMPONENTS[..])
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn recommend_for(&self, category: Category) -> Vec<String> {
        self.recommend(category.as_str())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecommerce_components() {
        let kb = KnowledgeBase::new();
        assert_eq!(
            kb.recommend("ecommerce"),
            vec!["Product grids", "Shopping carts", "Price tags", "Filter sidebars"]
        );
    }

    #[test]
    fn curated_lists_have_four_items() {
        let kb = KnowledgeBase::new();
        for category in [Category::RealEstate, Category::Ecommerce, Category::Corporate] {
            assert_eq!(kb.recommend_for(category).len(), 4);
        }
    }

    #[test]
    fn unmapped_category_falls_back() {
        let kb = KnowledgeBase::new();
        let fallback = vec!["General layout", "Standard navigation"];
        assert_eq!(kb.recommend("unmapped_category"), fallback);
        assert_eq!(kb.recommend_for(Category::Unknown), fallback);
        assert_eq!(kb.recommend_for(Category::Blog), fallback);
    }
}
