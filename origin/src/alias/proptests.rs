//! Property-based tests for alias expansion.

use super::expand;
use crate::shell::ShellContext;
use proptest::prelude::*;

/// Alias tables over a small alphabet so that chains and cycles are common.
fn alias_table() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-e]", "[a-e]( -[a-z])?"), 0..8)
}

fn build(aliases: &[(String, String)]) -> ShellContext {
    aliases
        .iter()
        .fold(ShellContext::new("/bin/bash"), |tables, (name, body)| {
            tables.with_alias(name.clone(), body.clone())
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Same table, same name, same expansion
    #[test]
    fn expansion_is_deterministic(aliases in alias_table(), name in "[a-f]") {
        let tables = build(&aliases);
        prop_assert_eq!(expand(&name, &tables), expand(&name, &tables));
    }

    // Every alias is expanded at most once, so the chain is bounded by the table
    #[test]
    fn expansion_terminates(aliases in alias_table(), name in "[a-f]") {
        let tables = build(&aliases);
        let expansion = expand(&name, &tables);
        prop_assert!(expansion.steps.len() <= tables.alias_count());

        let mut seen = std::collections::HashSet::new();
        for step in &expansion.steps {
            prop_assert!(seen.insert(step.from.clone()));
        }
    }

    // Steps link up: each step starts where the previous one ended
    #[test]
    fn steps_form_a_chain(aliases in alias_table(), name in "[a-f]") {
        let tables = build(&aliases);
        let expansion = expand(&name, &tables);
        let mut expected = name.clone();
        for step in &expansion.steps {
            prop_assert_eq!(&step.from, &expected);
            expected = step.to.clone();
        }
        if let Some(last) = expansion.steps.last() {
            prop_assert_eq!(&expansion.ending_name, &last.to);
        } else {
            prop_assert_eq!(&expansion.ending_name, &name);
        }
    }
}
