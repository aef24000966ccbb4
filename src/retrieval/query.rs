//! Query-side embedding.
//!
//! Queries never touch the TF-IDF vocabulary. Each known HMI term maps to
//! three fixed dimensions, and every token position up to a small window
//! adds a flat bonus so short queries still have some mass. This is a
//! different projection from the corpus side on purpose; ranking behaviour
//! depends on where the term-table dimensions land in vocabulary order.

use std::collections::HashMap;

use crate::embedding::EMBEDDING_DIM;

/// Position bonus window (tokens) and weight per token.
const POSITION_WINDOW: usize = 50;
const POSITION_WEIGHT: f32 = 0.1;

/// Maps known HMI vocabulary to embedding dimensions.
///
/// [`DomainTermTable::default`] carries the shipped tuning. Alternative
/// tables can be passed to [`query_embedding_with`]; dimensions outside
/// the vector are ignored.
pub struct DomainTermTable {
    terms: HashMap<String, [usize; 3]>,
}

impl Default for DomainTermTable {
    fn default() -> Self {
        let entries: [(&str, [usize; 3]); 19] = [
            ("tag", [1, 10, 20]),
            ("tags", [1, 10, 20]),
            ("read", [2, 11, 21]),
            ("write", [3, 12, 22]),
            ("alarm", [4, 13, 23]),
            ("screen", [5, 14, 24]),
            ("navigate", [5, 14, 24]),
            ("array", [6, 15, 25]),
            ("sort", [6, 15, 25]),
            ("string", [7, 16, 26]),
            ("math", [8, 17, 27]),
            ("date", [9, 18, 28]),
            ("time", [9, 18, 28]),
            ("error", [10, 19, 29]),
            ("log", [11, 20, 30]),
            ("temperature", [12, 21, 31]),
            ("motor", [13, 22, 32]),
            ("pump", [14, 23, 33]),
            ("valve", [15, 24, 34]),
        ];
        Self::new(entries.iter().map(|(t, d)| (t.to_string(), *d)))
    }
}

impl DomainTermTable {
    pub fn new(entries: impl IntoIterator<Item = (String, [usize; 3])>) -> Self {
        Self {
            terms: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn lookup(&self, token: &str) -> Option<&[usize; 3]> {
        self.terms.get(token)
    }
}

/// Split a query into tokens.
///
/// Unlike the corpus tokenizer this does not collapse whitespace before
/// splitting on single spaces, so a tab glues its neighbours into one
/// token. Kept that way for parity with the corpus this searches.
fn tokenize_query(query: &str) -> Vec<String> {
    let cleaned: String = query
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .trim()
        .split(' ')
        .filter(|word| word.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Embed a query using the default [`DomainTermTable`].
pub fn query_embedding(query: &str) -> Vec<f32> {
    query_embedding_with(query, &DomainTermTable::default())
}

/// Embed a query: +1 on each mapped dimension per known token, then the
/// flat position bonus over the first `min(tokens, 50)` dimensions.
pub fn query_embedding_with(query: &str, table: &DomainTermTable) -> Vec<f32> {
    let mut vector = vec![0.0_f32; EMBEDDING_DIM];
    let words = tokenize_query(query);

    for word in &words {
        if let Some(dims) = table.lookup(word) {
            for &dim in dims {
                if dim < EMBEDDING_DIM {
                    vector[dim] += 1.0;
                }
            }
        }
    }

    for slot in vector.iter_mut().take(words.len().min(POSITION_WINDOW)) {
        *slot += POSITION_WEIGHT;
    }

    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_terms_activate_mapped_dimensions() {
        let vector = query_embedding("read the alarm");

        // "read" -> 2/11/21, "alarm" -> 4/13/23; "the" is known to nobody.
        for dim in [11, 21, 13, 23] {
            assert_eq!(vector[dim], 1.0, "dim {dim}");
        }
        // Dim 2 sits inside the 3-token position window; dim 4 does not.
        assert!((vector[2] - 1.1).abs() < 1e-6);
        assert_eq!(vector[4], 1.0);
    }

    #[test]
    fn test_unknown_terms_leave_only_position_bonus() {
        let vector = query_embedding("xyzzy foobar");

        assert!((vector[0] - 0.1).abs() < 1e-6);
        assert!((vector[1] - 0.1).abs() < 1e-6);
        assert!(vector.iter().skip(2).all(|v| *v == 0.0));
    }

    #[test]
    fn test_position_bonus_window_is_capped() {
        let many: Vec<String> = (0..60).map(|i| format!("word{i:02}")).collect();
        let vector = query_embedding(&many.join(" "));

        assert!((vector[0] - 0.1).abs() < 1e-6);
        assert!((vector[POSITION_WINDOW - 1] - 0.1).abs() < 1e-6);
        assert_eq!(vector[POSITION_WINDOW], 0.0);
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let vector = query_embedding("tag tag tag");
        assert!((vector[1] - 3.1).abs() < 1e-6);
        assert_eq!(vector[10], 3.0);
        assert_eq!(vector[20], 3.0);
    }

    #[test]
    fn test_tab_joins_tokens_instead_of_splitting() {
        // "read\ttag" survives as one token, so neither term fires and the
        // position bonus covers a single slot.
        let vector = query_embedding("read\ttag");

        assert!((vector[0] - 0.1).abs() < 1e-6);
        assert!(vector.iter().skip(1).all(|v| *v == 0.0));
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        // After punctuation strip "it s a" all fall under the length floor.
        let vector = query_embedding("it's a");
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_custom_table_with_out_of_range_dimension() {
        let table = DomainTermTable::new([
            ("conveyor".to_string(), [7, 150, 9999]),
        ]);
        let vector = query_embedding_with("conveyor", &table);

        // One token, so the position bonus covers dim 0 only.
        assert!((vector[0] - 0.1).abs() < 1e-6);
        assert_eq!(vector[7], 1.0);
        assert_eq!(vector[150], 1.0);
        // dim 9999 is silently ignored.
        assert_eq!(vector.len(), crate::embedding::EMBEDDING_DIM);
    }
}
