//! Keyword classifier: the default intent extraction strategy.
//!
//! Matches case-insensitive substrings of the request against bilingual
//! (English / Arabic) keyword lists. Rules are evaluated in table order:
//!
//! - **Category**: first matching rule wins, otherwise `unknown`
//! - **Tone**: first matching rule wins, otherwise `professional`
//! - **Features**: every matching rule contributes its tag
//!
//! Lower-priority category matches are ignored for the category itself but
//! can still surface through feature rules.

use serde::{Deserialize, Serialize};
use sitewright_core::intent::{Category, Classifier, SemanticIntent, Tone};
use tracing::debug;

/// Feature tag for map / location requests.
pub const FEATURE_MAP: &str = "map-integration";
/// Feature tag for search / filtering requests.
pub const FEATURE_SEARCH: &str = "advanced-search";
/// Feature tag for payment requests.
pub const FEATURE_PAYMENT: &str = "payment-gateway";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneRule {
    pub tone: Tone,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRule {
    pub tag: String,
    pub keywords: Vec<String>,
}

/// Ordered keyword rules driving a [`KeywordClassifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTable {
    /// Checked in priority order.
    pub categories: Vec<CategoryRule>,
    /// Checked in priority order.
    pub tones: Vec<ToneRule>,
    /// All checked, in order.
    pub features: Vec<FeatureRule>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryRule {
                    category: Category::RealEstate,
                    keywords: words(&[
                        "real estate", "realestate", "property", "properties", "apartment",
                        "villa", "realtor", "rental", "عقار", "شقة", "شقق", "فيلا", "فلل",
                        "منزل", "منازل",
                    ]),
                },
                CategoryRule {
                    category: Category::Ecommerce,
                    keywords: words(&[
                        "ecommerce", "e-commerce", "online store", "shop", "store", "sell",
                        "products", "cart", "متجر", "تسوق", "بيع", "منتجات",
                    ]),
                },
                CategoryRule {
                    category: Category::Corporate,
                    keywords: words(&[
                        "company", "corporate", "business", "enterprise", "agency", "شركة",
                        "شركات", "مؤسسة", "أعمال",
                    ]),
                },
            ],
            tones: vec![
                ToneRule {
                    tone: Tone::Minimalist,
                    keywords: words(&["minimal", "simple", "clean", "بسيط", "هادئ"]),
                },
                ToneRule {
                    tone: Tone::Bold,
                    keywords: words(&[
                        "bold", "vibrant", "colorful", "colourful", "striking", "جريء", "جريئة",
                        "ملون", "حيوي",
                    ]),
                },
            ],
            features: vec![
                FeatureRule {
                    tag: FEATURE_MAP.into(),
                    keywords: words(&["map", "location", "خريطة", "خرائط"]),
                },
                FeatureRule {
                    tag: FEATURE_SEARCH.into(),
                    keywords: words(&["search", "filter", "بحث", "فلتر", "تصفية"]),
                },
                FeatureRule {
                    tag: FEATURE_PAYMENT.into(),
                    keywords: words(&["payment", "checkout", "pay", "دفع"]),
                },
            ],
        }
    }
}

impl KeywordTable {
    /// Lowercase every keyword so matching only has to fold the input.
    fn normalized(mut self) -> Self {
        let fold = |list: &mut Vec<String>| {
            for keyword in list.iter_mut() {
                *keyword = keyword.to_lowercase();
            }
        };
        self.categories.iter_mut().for_each(|r| fold(&mut r.keywords));
        self.tones.iter_mut().for_each(|r| fold(&mut r.keywords));
        self.features.iter_mut().for_each(|r| fold(&mut r.keywords));
        self
    }
}

fn matches_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| !k.is_empty() && haystack.contains(k.as_str()))
}

/// Substring-matching classifier over a [`KeywordTable`].
pub struct KeywordClassifier {
    table: KeywordTable,
}

impl KeywordClassifier {
    pub fn new(table: KeywordTable) -> Self {
        Self {
            table: table.normalized(),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}

impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    fn classify(&self, text: &str) -> SemanticIntent {
        let lower = text.to_lowercase();

        let category = self
            .table
            .categories
            .iter()
            .find(|rule| matches_any(&lower, &rule.keywords))
            .map(|rule| rule.category)
            .unwrap_or(Category::Unknown);

        let tone = self
            .table
            .tones
            .iter()
            .find(|rule| matches_any(&lower, &rule.keywords))
            .map(|rule| rule.tone)
            .unwrap_or(Tone::Professional);

        let mut intent = SemanticIntent::new(category, tone);
        for rule in &self.table.features {
            if matches_any(&lower, &rule.keywords) {
                intent.add_feature(rule.tag.clone());
            }
        }

        debug!(
            category = %intent.category,
            tone = %intent.tone,
            features = intent.features.len(),
            "Intent extracted"
        );
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> SemanticIntent {
        KeywordClassifier::default().classify(text)
    }

    #[test]
    fn unmatched_text_yields_defaults() {
        for text in ["hello world", "I want a page about my cooking hobby", ""] {
            assert_eq!(classify(text), SemanticIntent::default(), "input: {text:?}");
        }
    }

    #[test]
    fn real_estate_beats_ecommerce() {
        let intent = classify("Selling property in a shop");
        assert_eq!(intent.category, Category::RealEstate);

        let intent = classify("متجر لبيع شقق");
        assert_eq!(intent.category, Category::RealEstate);
    }

    #[test]
    fn ecommerce_beats_corporate() {
        let intent = classify("A business that wants an online store");
        assert_eq!(intent.category, Category::Ecommerce);
    }

    #[test]
    fn corporate_detected() {
        assert_eq!(classify("Website for our Agency").category, Category::Corporate);
        assert_eq!(classify("موقع شركة").category, Category::Corporate);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let intent = classify("REAL ESTATE portal, BOLD look");
        assert_eq!(intent.category, Category::RealEstate);
        assert_eq!(intent.tone, Tone::Bold);
    }

    #[test]
    fn minimalist_checked_before_bold() {
        let intent = classify("A simple yet bold corporate site");
        assert_eq!(intent.tone, Tone::Minimalist);
        assert_eq!(intent.category, Category::Corporate);
    }

    #[test]
    fn playful_never_detected() {
        let intent = classify("a playful, fun and whimsical blog");
        assert_eq!(intent.tone, Tone::Professional);
        assert_eq!(intent.category, Category::Unknown);
    }

    #[test]
    fn features_accumulate_in_order() {
        let intent =
            classify("A bold online store with a map of branches, product search and secure payment");
        assert_eq!(intent.category, Category::Ecommerce);
        assert_eq!(intent.tone, Tone::Bold);
        assert_eq!(
            intent.features,
            vec![FEATURE_MAP, FEATURE_SEARCH, FEATURE_PAYMENT]
        );
    }

    #[test]
    fn arabic_features_detected() {
        let intent = classify("موقع عقارات مع خريطة وبحث");
        assert_eq!(intent.category, Category::RealEstate);
        assert_eq!(intent.features, vec![FEATURE_MAP, FEATURE_SEARCH]);
    }

    #[test]
    fn features_do_not_need_a_category() {
        let intent = classify("just a map please");
        assert_eq!(intent.category, Category::Unknown);
        assert_eq!(intent.features, vec![FEATURE_MAP]);
    }

    #[test]
    fn arabic_store_request() {
        let intent = classify("أريد متجر بسيط لبيع الملابس");
        assert_eq!(intent.category, Category::Ecommerce);
        assert_eq!(intent.tone, Tone::Minimalist);
        assert!(intent.features.is_empty());
    }

    #[test]
    fn custom_table_can_detect_blog() {
        let mut table = KeywordTable::default();
        table.categories.push(CategoryRule {
            category: Category::Blog,
            keywords: vec!["BLOG".into()],
        });
        let classifier = KeywordClassifier::new(table);
        assert_eq!(classifier.classify("my travel blog").category, Category::Blog);
    }

    #[test]
    fn table_loads_from_json() {
        let json = serde_json::json!({
            "categories": [{"category": "blog", "keywords": ["diary"]}],
            "tones": [{"tone": "playful", "keywords": ["fun"]}],
            "features": []
        });
        let table: KeywordTable = serde_json::from_value(json).unwrap();
        let intent = KeywordClassifier::new(table).classify("A fun diary");
        assert_eq!(intent.category, Category::Blog);
        assert_eq!(intent.tone, Tone::Playful);
    }
}
