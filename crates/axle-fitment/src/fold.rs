//! Generic subtree folds.
//!
//! Option resolution needs two aggregations over a subtree: "all child labels
//! exactly N levels down" (when an ancestor field is unknown) and "every
//! transmission label on any leaf below here". Both are the same recursive
//! walk with a different stopping rule, so they share one fold parameterized
//! by a [`Target`].

use std::collections::BTreeSet;

use crate::tree::FitmentNode;

/// What a subtree fold is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Child labels found exactly this many levels below the start node.
    /// `KeysAtDepth(0)` is the start node's own children.
    KeysAtDepth(usize),
    /// Every transmission label on every leaf anywhere below the start node.
    LeafValues,
}

/// Fold a subtree into a deduplicated, lexically sorted label list.
#[must_use]
pub fn collect_labels(node: &FitmentNode, target: Target) -> Vec<String> {
    let mut out = BTreeSet::new();
    walk(node, target, &mut out);
    out.into_iter().collect()
}

fn walk(node: &FitmentNode, target: Target, out: &mut BTreeSet<String>) {
    match (node, target) {
        (FitmentNode::Branch { children, .. }, Target::KeysAtDepth(0)) => {
            for label in children.keys() {
                let _ = out.insert(label.clone());
            }
        }
        (FitmentNode::Branch { children, .. }, Target::KeysAtDepth(depth)) => {
            for child in children.values() {
                walk(child, Target::KeysAtDepth(depth - 1), out);
            }
        }
        (FitmentNode::Branch { children, .. }, Target::LeafValues) => {
            for child in children.values() {
                walk(child, Target::LeafValues, out);
            }
        }
        (FitmentNode::Leaf(transmissions), Target::LeafValues) => {
            for label in transmissions {
                let _ = out.insert(label.clone());
            }
        }
        // A leaf is shallower than the requested depth: nothing to collect.
        (FitmentNode::Leaf(_), Target::KeysAtDepth(_)) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{Target, collect_labels};
    use crate::tree::FitmentTree;

    fn sample() -> FitmentTree {
        FitmentTree::from_json_str(
            r#"{
                "2020": {
                    "Porsche": {
                        "911": {
                            "redirectUrls": { "default": "/carmakers/porsche/911" },
                            "Carrera": {
                                "2dr Coupe": { "3.0L H6": ["8-speed PDK", "7-speed Manual"] },
                                "2dr Cabrio": { "3.0L H6": ["8-speed PDK"] }
                            },
                            "Carrera S": {
                                "2dr Coupe": { "3.0L H6 S": ["8-speed PDK"] },
                                "2dr Targa": { "3.0L H6 S": ["8-speed PDK"] }
                            }
                        }
                    }
                }
            }"#,
        )
        .expect("sample dataset is well formed")
    }

    #[test]
    fn depth_zero_is_direct_children() {
        let tree = sample();
        let model = tree.descend(2020, &["Porsche", "911"]).unwrap();
        let labels = collect_labels(model, Target::KeysAtDepth(0));
        assert_eq!(labels, vec!["Carrera".to_string(), "Carrera S".to_string()]);
    }

    #[test]
    fn deeper_keys_union_across_branches() {
        let tree = sample();
        let model = tree.descend(2020, &["Porsche", "911"]).unwrap();
        let chassis = collect_labels(model, Target::KeysAtDepth(1));
        assert_eq!(
            chassis,
            vec![
                "2dr Cabrio".to_string(),
                "2dr Coupe".to_string(),
                "2dr Targa".to_string()
            ]
        );
    }

    #[test]
    fn leaf_values_dedupe_across_the_subtree() {
        let tree = sample();
        let model = tree.descend(2020, &["Porsche", "911"]).unwrap();
        let transmissions = collect_labels(model, Target::LeafValues);
        assert_eq!(
            transmissions,
            vec!["7-speed Manual".to_string(), "8-speed PDK".to_string()]
        );
    }

    #[test]
    fn depth_past_the_leaves_collects_nothing() {
        let tree = sample();
        let model = tree.descend(2020, &["Porsche", "911"]).unwrap();
        assert!(collect_labels(model, Target::KeysAtDepth(9)).is_empty());
    }
}
