//! Reasoning engine: derives an explanation chain from an intent.
//!
//! The rules are fixed and deterministic: one opening step naming the
//! category, a category-specific body and conclusion, and an optional
//! minimalist adjustment that raises confidence once.

use sitewright_core::intent::{Category, SemanticIntent, Tone};
use sitewright_core::reasoning::ReasoningChain;

/// Confidence bonus applied when the tone is minimalist.
pub const MINIMALIST_BONUS: f64 = 0.05;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReasoningEngine;

impl ReasoningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the reasoning chain for `intent`.
    pub fn reason(&self, intent: &SemanticIntent) -> ReasoningChain {
        let mut chain = ReasoningChain::new();
        chain.push_step(format!("Analyzing request category: {}", intent.category));

        match intent.category {
            Category::RealEstate => {
                chain.push_step(
                    "Property buyers decide on visuals first; high-resolution galleries and floor plans are required",
                );
                chain.push_step(
                    "Trust signals such as agent credentials, testimonials and verified listings drive inquiries",
                );
                chain.conclude("prioritize visual clarity and lead-generation conversion");
            }
            Category::Ecommerce => {
                chain.push_step(
                    "Shoppers need fast product discovery through clear categories and filtering",
                );
                chain.push_step(
                    "Checkout friction is the main cause of abandoned carts; keep the purchase path short",
                );
                chain.conclude("prioritize transactional efficiency and product showcasing");
            }
            Category::Blog | Category::Corporate | Category::Unknown => {
                chain.push_step(
                    "No specialised template applies; fall back to a clear content structure",
                );
                chain.conclude("prioritize information hierarchy and call-to-action visibility");
            }
        }

        if intent.tone == Tone::Minimalist {
            chain.push_step(
                "Minimalist tone requested: optimize white space and remove non-essential elements",
            );
            chain.adjust_confidence(MINIMALIST_BONUS);
        }

        chain
    }
}
