//! Option resolution for each field of the selector.
//!
//! Every list is derived from the fitment tree and the fields selected so
//! far. The sentinel fields (submodel and deeper) always offer
//! [`UNKNOWN`] first; when an ancestor field is already the sentinel, the
//! candidate list is the union over every matching subtree instead of a
//! single branch, so a user who skipped a field still gets a meaningful
//! superset to pick from.
//!
//! Listing never fails: a traversal that comes up empty (data removed, odd
//! stored label) degrades to an empty list and a one-time warning, because a
//! browsing UI must keep working even over a stale selection.

use axle_common::warning::warn_once;
use axle_fitment::fold::{Target, collect_labels};
use axle_fitment::{Field, FitmentNode, FitmentTree};

use crate::selection::{Selection, UNKNOWN};

/// The candidate values for a field, given the current selection.
///
/// Years are newest-first; every other list is lexically ascending, with the
/// sentinel prepended for the fields that accept it.
#[must_use]
pub fn options_for(field: Field, selection: &Selection, tree: &FitmentTree) -> Vec<String> {
    match field {
        Field::Year => tree
            .years_desc()
            .iter()
            .map(ToString::to_string)
            .collect(),
        Field::Make => direct_children(selection, tree, Field::Year),
        Field::Model => direct_children(selection, tree, Field::Make),
        Field::Submodel => with_unknown(direct_children(selection, tree, Field::Model)),
        Field::Chassis => {
            let labels = if selection.is_unknown(Field::Submodel) {
                union_below(selection, tree, Field::Model, 1)
            } else {
                direct_children(selection, tree, Field::Submodel)
            };
            with_unknown(labels)
        }
        Field::Engine => {
            let labels = if selection.is_unknown(Field::Submodel) {
                union_below(selection, tree, Field::Model, 2)
            } else if selection.is_unknown(Field::Chassis) {
                union_below(selection, tree, Field::Submodel, 1)
            } else {
                direct_children(selection, tree, Field::Chassis)
            };
            with_unknown(labels)
        }
        Field::Transmission => {
            let any_unknown = selection.is_unknown(Field::Submodel)
                || selection.is_unknown(Field::Chassis)
                || selection.is_unknown(Field::Engine);
            let labels = if any_unknown {
                // Aggregation deliberately spans the whole model subtree,
                // matching the observed behavior of the data feed.
                selected_node(selection, tree, Field::Model)
                    .map(|model| collect_labels(model, Target::LeafValues))
                    .unwrap_or_default()
            } else {
                direct_children(selection, tree, Field::Engine)
            };
            with_unknown(labels)
        }
    }
}

/// Case-insensitive substring filter over an option list, order preserved.
///
/// Applied by the UI adapter after its debounce; an empty input keeps
/// everything.
#[must_use]
pub fn filter_options(options: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Labels of the children directly below the node selected through `deepest`.
fn direct_children(selection: &Selection, tree: &FitmentTree, deepest: Field) -> Vec<String> {
    selected_node(selection, tree, deepest)
        .map(FitmentNode::option_labels)
        .unwrap_or_default()
}

/// Union of the child labels `depth` levels below the node selected through
/// `deepest`.
fn union_below(
    selection: &Selection,
    tree: &FitmentTree,
    deepest: Field,
    depth: usize,
) -> Vec<String> {
    selected_node(selection, tree, deepest)
        .map(|node| collect_labels(node, Target::KeysAtDepth(depth)))
        .unwrap_or_default()
}

/// Descend the tree consuming the selected values of year through `deepest`.
///
/// `None` when any of those fields is unset, or when a selected label is no
/// longer present in the dataset (warned once, treated as "no options").
fn selected_node<'t>(
    selection: &Selection,
    tree: &'t FitmentTree,
    deepest: Field,
) -> Option<&'t FitmentNode> {
    let year_label = selection.get(Field::Year)?;
    let Ok(year) = year_label.parse::<u16>() else {
        let _ = warn_once("Options", &format!("selected year {year_label:?} is not numeric"));
        return None;
    };
    let Some(mut node) = tree.year(year) else {
        let _ = warn_once("Options", &format!("no dataset entry for year {year_label}"));
        return None;
    };
    for field in [Field::Make, Field::Model, Field::Submodel, Field::Chassis, Field::Engine] {
        if field > deepest {
            break;
        }
        let label = selection.get(field)?;
        match node.child(label) {
            Some(child) => node = child,
            None => {
                let _ = warn_once("Options", &format!("no dataset entry for {field} {label:?}"));
                return None;
            }
        }
    }
    Some(node)
}

/// Prepend the unknown sentinel to a candidate list.
fn with_unknown(labels: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(labels.len() + 1);
    out.push(UNKNOWN.to_string());
    out.extend(labels);
    out
}
