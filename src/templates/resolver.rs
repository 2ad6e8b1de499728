//! Template selection.
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{TemplateTable, FALLBACK_TEMPLATE};
use crate::data::Triple;

/// How a template is picked among the candidates of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Always use the first candidate.
    First,
    /// Pick a candidate uniformly at random.
    Sample,
}

impl TemplateTable {
    /// Get the template for `triple`, using the thread-local rng when sampling.
    ///
    /// Never fails: falls back to [FALLBACK_TEMPLATE] when nothing matches.
    pub fn resolve(&self, triple: &Triple, policy: SelectionPolicy) -> &str {
        self.resolve_with_rng(triple, policy, &mut rand::thread_rng())
    }

    /// Same as [TemplateTable::resolve], with a caller-provided rng.
    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        triple: &Triple,
        policy: SelectionPolicy,
        rng: &mut R,
    ) -> &str {
        let entry = match self.get(triple.pred()) {
            Some(entry) => entry,
            None => {
                match policy {
                    SelectionPolicy::First => {
                        debug!("No template for {}, using a fallback", triple.pred())
                    }
                    SelectionPolicy::Sample => {
                        warn!("No template for {}, using a fallback", triple.pred())
                    }
                }
                return FALLBACK_TEMPLATE;
            }
        };

        let candidates = entry.candidates(triple.obj()).unwrap_or_default();
        let template = match policy {
            SelectionPolicy::First => candidates.first(),
            SelectionPolicy::Sample => candidates.choose(rng),
        };

        match template {
            Some(template) => template.as_str(),
            None => {
                debug!("No template for {} = {:?}, using a fallback", triple.pred(), triple.obj());
                FALLBACK_TEMPLATE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::templates::TemplateEntry;

    fn family_friendly() -> TemplateTable {
        serde_json::from_str(
            r#"{"familyFriendly": {"yes": ["Yes template"], "no": ["No template"]},
                "food": ["<subject> serves <object> food .", "unused"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn first_by_value() {
        let table = family_friendly();
        let t = Triple::new("The Eagle", "familyFriendly", "yes");
        assert_eq!(table.resolve(&t, SelectionPolicy::First), "Yes template");
        let t = Triple::new("The Eagle", "familyFriendly", "no");
        assert_eq!(table.resolve(&t, SelectionPolicy::First), "No template");
    }

    #[test]
    fn first_flat() {
        let table = family_friendly();
        let t = Triple::new("The Eagle", "food", "French");
        assert_eq!(
            table.resolve(&t, SelectionPolicy::First),
            "<subject> serves <object> food ."
        );
    }

    #[test]
    fn unknown_value() {
        let table = family_friendly();
        let t = Triple::new("The Eagle", "familyFriendly", "sometimes");
        assert_eq!(table.resolve(&t, SelectionPolicy::First), FALLBACK_TEMPLATE);
        assert_eq!(table.resolve(&t, SelectionPolicy::Sample), FALLBACK_TEMPLATE);
    }

    #[test]
    fn empty_table() {
        let table = TemplateTable::default();
        let t = Triple::new("s", "p", "o");
        for policy in [SelectionPolicy::First, SelectionPolicy::Sample] {
            let template = table.resolve(&t, policy);
            assert!(!template.is_empty());
            assert_eq!(template, FALLBACK_TEMPLATE);
        }
    }

    #[test]
    fn empty_candidates() {
        let table: TemplateTable = [("p".to_string(), TemplateEntry::Flat(vec![]))]
            .into_iter()
            .collect();
        let t = Triple::new("s", "p", "o");
        assert_eq!(table.resolve(&t, SelectionPolicy::First), FALLBACK_TEMPLATE);
        assert_eq!(table.resolve(&t, SelectionPolicy::Sample), FALLBACK_TEMPLATE);
    }

    #[test]
    fn sample_membership() {
        let table: TemplateTable = serde_json::from_str(r#"{"p": ["t1", "t2", "t3"]}"#).unwrap();
        let candidates: HashSet<&str> = ["t1", "t2", "t3"].into_iter().collect();
        let t = Triple::new("Q1", "p", "Q2");

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let template = table.resolve(&t, SelectionPolicy::Sample);
            assert!(candidates.contains(template));
            seen.insert(template);
        }
        assert_eq!(seen, candidates);
    }

    #[test]
    fn sample_seeded() {
        let table: TemplateTable = serde_json::from_str(r#"{"p": ["t1", "t2", "t3"]}"#).unwrap();
        let t = Triple::new("Q1", "p", "Q2");

        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| table.resolve_with_rng(&t, SelectionPolicy::Sample, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn table_untouched() {
        let table = family_friendly();
        let before = table.clone();
        let t = Triple::new("The Eagle", "food", "French");
        for _ in 0..10 {
            table.resolve(&t, SelectionPolicy::Sample);
        }
        assert_eq!(table, before);
    }
}
