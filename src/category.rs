//! Category gating for log and timer events
//!
//! Every public operation carries a category string. An event is only eligible
//! for output when its category is active: the empty category is always active
//! (unconditional instrumentation), any other category is active only while it
//! is present in the enabled set.
//!
//! Independently of activeness, every non-empty category the program attempts
//! to use is recorded once, in first-seen order. That list is the read-only
//! audit trail a host can inspect to discover which categories exist.

use anyhow::{bail, Result};
use std::collections::HashSet;

/// Decides which categories produce output and remembers every category seen.
#[derive(Debug, Clone, Default)]
pub struct CategoryGate {
    /// Allow-list of categories that produce output
    enabled: HashSet<String>,
    /// Every non-empty category ever passed to an operation, first-seen order
    seen: Vec<String>,
}

impl CategoryGate {
    /// Create a gate with an empty allow-list.
    ///
    /// Only the empty (unconditional) category is active until categories are
    /// enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an allow-list expression like "categories=Main Events,Parsing".
    ///
    /// Category names are comma-separated and trimmed. An empty spec
    /// ("categories=") yields a gate with nothing enabled.
    pub fn from_expr(expr: &str) -> Result<Self> {
        if let Some(spec) = expr.strip_prefix("categories=") {
            let mut gate = Self::new();
            for part in spec.split(',') {
                let part = part.trim();
                if !part.is_empty() {
                    gate.enabled.insert(part.to_string());
                }
            }
            Ok(gate)
        } else {
            bail!(
                "Invalid category expression: {}. Expected format: categories=SPEC",
                expr
            );
        }
    }

    /// Add a category to the enabled set.
    pub fn enable(&mut self, category: impl Into<String>) {
        self.enabled.insert(category.into());
    }

    /// Remove a category from the enabled set.
    ///
    /// The category stays in the seen list if it was ever used.
    pub fn disable(&mut self, category: &str) {
        self.enabled.remove(category);
    }

    /// Replace the enabled set wholesale.
    pub fn set_enabled<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled = categories.into_iter().map(Into::into).collect();
    }

    /// Check whether a category produces output.
    ///
    /// The empty category is always active.
    pub fn is_active(&self, category: &str) -> bool {
        category.is_empty() || self.enabled.contains(category)
    }

    /// Record a category in the seen list.
    ///
    /// Called by every public operation regardless of activeness. The empty
    /// category is never recorded; a repeated category is recorded only once.
    pub fn register(&mut self, category: &str) {
        if category.is_empty() {
            return;
        }
        if !self.seen.iter().any(|c| c == category) {
            self.seen.push(category.to_string());
        }
    }

    /// Every non-empty category ever passed to an operation, first-seen order.
    pub fn all(&self) -> &[String] {
        &self.seen
    }
}
