//! Regex-derived domain features.
//!
//! The last ten dimensions of a template vector do not hold TF-IDF weights.
//! Each one counts occurrences of a WinCC-specific pattern (tag access,
//! trace calls, alarm handling, ...) scaled by a fixed divisor. The counts
//! come from the raw lowercased text, before tokenization.

use regex::Regex;

use super::TFIDF_DIMS;

/// A single scored pattern. The occurrence count in a text is divided by
/// `divisor` before landing in the vector.
pub struct DomainFeature {
    pub name: &'static str,
    pattern: Regex,
    pub divisor: f32,
}

impl DomainFeature {
    fn new(name: &'static str, pattern: &str, divisor: f32) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid feature pattern"),
            divisor,
        }
    }

    /// Scaled occurrence count of this pattern. Expects lowercased text.
    pub fn score(&self, text: &str) -> f32 {
        self.pattern.find_iter(text).count() as f32 / self.divisor
    }
}

/// The tuned feature set. Entry `i` owns vector dimension `TFIDF_DIMS + i`.
///
/// [`FeatureTable::default`] holds the shipped tuning; callers can build an
/// embedder around a different table without touching this module.
pub struct FeatureTable {
    features: Vec<DomainFeature>,
}

impl Default for FeatureTable {
    fn default() -> Self {
        Self {
            features: vec![
                DomainFeature::new("tag_access", r"tags?\(", 10.0),
                DomainFeature::new("error_handling", r"try|catch|error", 5.0),
                DomainFeature::new("runtime_trace", r"hmiruntime", 5.0),
                DomainFeature::new("screen_navigation", r"screen|navigate|switch", 5.0),
                DomainFeature::new("alarms", r"alarm|alert|warning", 5.0),
                DomainFeature::new("data_logging", r"data|log|record|save", 5.0),
                DomainFeature::new("array_ops", r"array|sort|filter|map", 5.0),
                DomainFeature::new("string_ops", r"string|text|format|parse", 5.0),
                DomainFeature::new("time_ops", r"time|date|schedule|timer", 5.0),
                DomainFeature::new("math_ops", r"math|calculate|sum|average", 5.0),
            ],
        }
    }
}

impl FeatureTable {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[DomainFeature] {
        &self.features
    }

    /// Write feature scores into the tail of `vector`, overwriting whatever
    /// TF-IDF weights landed there. Entries past the end of `vector` are
    /// ignored.
    pub fn apply(&self, lowered: &str, vector: &mut [f32]) {
        for (i, feature) in self.features.iter().enumerate() {
            let dim = TFIDF_DIMS + i;
            if dim < vector.len() {
                vector[dim] = feature.score(lowered);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{EMBEDDING_DIM, FEATURE_DIMS};

    #[test]
    fn test_default_table_fills_feature_dims() {
        assert_eq!(FeatureTable::default().len(), FEATURE_DIMS);
    }

    #[test]
    fn test_tag_access_counts_call_sites() {
        let table = FeatureTable::default();
        let tag_access = &table.features()[0];
        // Two call sites, one "tags(" variant, divisor 10.
        let text = r#"tags("motor1").read(); tag("motor2").write(1);"#;
        assert!((tag_access.score(text) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_error_handling_counts_each_keyword() {
        let table = FeatureTable::default();
        let error_handling = &table.features()[1];
        let text = "try { work(); } catch (error) { }";
        assert!((error_handling.score(text) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_apply_overwrites_tail_and_leaves_head() {
        let table = FeatureTable::default();
        let mut vector = vec![1.0_f32; EMBEDDING_DIM];
        table.apply("plain prose with no hmi markers at all", &mut vector);

        for value in vector.iter().take(TFIDF_DIMS) {
            assert_eq!(*value, 1.0);
        }
        // "no hmi markers" trips nothing; the tail is overwritten with zeros.
        for value in vector.iter().skip(TFIDF_DIMS) {
            assert_eq!(*value, 0.0);
        }
    }

    #[test]
    fn test_apply_scores_expected_dimensions() {
        let table = FeatureTable::default();
        let mut vector = vec![0.0_f32; EMBEDDING_DIM];
        table.apply("screen alarm alarm hmiruntime", &mut vector);

        assert!((vector[TFIDF_DIMS + 2] - 0.2).abs() < 1e-6, "one hmiruntime hit");
        assert!((vector[TFIDF_DIMS + 3] - 0.2).abs() < 1e-6, "one screen hit");
        assert!((vector[TFIDF_DIMS + 4] - 0.4).abs() < 1e-6, "two alarm hits");
    }
}
