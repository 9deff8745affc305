//! The date-format rule table.
//!
//! Normalization is a fixed, priority-ordered sequence of attempts:
//!
//! ```text
//! (30) iso      -> YYYY-MM-DD / YYYY/MM/DD        (unambiguous, wins)
//! (20) numeric  -> MM/DD/YYYY vs DD/MM/YYYY       (heuristic ordering)
//! (10) textual  -> March 14, 1879 / 14 March 1879 (month names)
//! ```
//!
//! The first rule whose anchored pattern matches commits the interpretation;
//! see `FormatRule` in the crate root for the contract.

pub(crate) mod helpers;

mod iso;
mod numeric;
mod textual;

use crate::FormatRule;

/// All format rules, highest priority first.
pub(crate) fn get() -> Vec<FormatRule> {
    let mut rules = Vec::new();
    rules.extend(iso::rules());
    rules.extend(numeric::rules());
    rules.extend(textual::rules());
    rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_sorted_by_descending_priority() {
        let rules = get();
        assert!(!rules.is_empty());
        assert!(rules.windows(2).all(|w| w[0].priority >= w[1].priority));
        assert_eq!(rules[0].name, "yyyy-mm-dd");
    }
}
