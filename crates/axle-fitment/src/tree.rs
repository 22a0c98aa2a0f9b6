//! The fitment tree and its JSON wire shape.

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::Value;

use crate::error::DataError;

/// Reserved key carrying a node's redirect-URL side map on the wire.
///
/// This key is metadata, never a selectable option label, so loading strips
/// it out of the children and stores it separately.
pub const REDIRECT_URLS_KEY: &str = "redirectUrls";

/// One node of the fitment tree.
///
/// Internal levels (make through engine) are branches; the level below an
/// engine is a leaf listing that engine's transmissions. The tree has a fixed
/// logical depth of six internal levels plus the leaf array, but the node
/// type itself is uniform so traversal can be written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitmentNode {
    /// An internal level: labeled children plus optional redirect URLs.
    Branch {
        /// Child nodes keyed by option label, lexically ordered.
        children: BTreeMap<String, FitmentNode>,
        /// Context label → URL path, when this node carries redirect targets.
        /// Present on model nodes and occasionally on submodel nodes, where
        /// the submodel-level entries override the model-level ones.
        redirect_urls: Option<BTreeMap<String, String>>,
    },
    /// The terminal level: transmission labels for one engine.
    Leaf(Vec<String>),
}

impl FitmentNode {
    /// An empty branch node.
    #[must_use]
    pub fn empty_branch() -> Self {
        Self::Branch {
            children: BTreeMap::new(),
            redirect_urls: None,
        }
    }

    /// Child nodes of this node, or `None` for a leaf.
    #[must_use]
    pub fn children(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Branch { children, .. } => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// The child with the given option label, if this is a branch.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<&Self> {
        self.children().and_then(|children| children.get(label))
    }

    /// The redirect-URL side map, if this node carries one.
    #[must_use]
    pub fn redirect_urls(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Branch { redirect_urls, .. } => redirect_urls.as_ref(),
            Self::Leaf(_) => None,
        }
    }

    /// The transmission labels, if this is a leaf.
    #[must_use]
    pub fn transmissions(&self) -> Option<&[String]> {
        match self {
            Self::Branch { .. } => None,
            Self::Leaf(transmissions) => Some(transmissions),
        }
    }

    /// Selectable option labels directly under this node, lexically sorted.
    ///
    /// For a leaf this is the (sorted, deduplicated) transmission list.
    #[must_use]
    pub fn option_labels(&self) -> Vec<String> {
        match self {
            Self::Branch { children, .. } => children.keys().cloned().collect(),
            Self::Leaf(transmissions) => {
                let mut labels: Vec<String> = transmissions.clone();
                labels.sort();
                labels.dedup();
                labels
            }
        }
    }

    /// Parse a node from its JSON wire shape.
    ///
    /// An object is a branch whose `redirectUrls` key (if any) becomes the
    /// side map; an array is a transmission leaf; anything else is malformed.
    fn from_value(value: &Value, path: &str) -> Result<Self, DataError> {
        match value {
            Value::Object(entries) => {
                let mut children = BTreeMap::new();
                let mut redirect_urls = None;
                for (label, child) in entries {
                    if label == REDIRECT_URLS_KEY {
                        redirect_urls = Some(parse_redirect_map(child, path)?);
                    } else {
                        let child_path = format!("{path}/{label}");
                        let _ = children
                            .insert(label.clone(), Self::from_value(child, &child_path)?);
                    }
                }
                Ok(Self::Branch {
                    children,
                    redirect_urls,
                })
            }
            Value::Array(items) => {
                let mut transmissions = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(label) => transmissions.push(label.to_string()),
                        None => {
                            return Err(DataError::LeafShape {
                                path: path.to_string(),
                            });
                        }
                    }
                }
                Ok(Self::Leaf(transmissions))
            }
            _ => Err(DataError::NodeShape {
                path: path.to_string(),
            }),
        }
    }
}

fn parse_redirect_map(value: &Value, path: &str) -> Result<BTreeMap<String, String>, DataError> {
    let entries = value.as_object().ok_or_else(|| DataError::RedirectShape {
        path: path.to_string(),
    })?;
    let mut map = BTreeMap::new();
    for (context, url) in entries {
        let url = url.as_str().ok_or_else(|| DataError::RedirectShape {
            path: path.to_string(),
        })?;
        let _ = map.insert(context.clone(), url.to_string());
    }
    Ok(map)
}

/// The full fitment dataset, keyed by model year at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitmentTree {
    years: BTreeMap<u16, FitmentNode>,
}

impl FitmentTree {
    /// An empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dataset has no years at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Number of model years in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// All model years, newest first.
    #[must_use]
    pub fn years_desc(&self) -> Vec<u16> {
        self.years.keys().rev().copied().collect()
    }

    /// The subtree for one model year.
    #[must_use]
    pub fn year(&self, year: u16) -> Option<&FitmentNode> {
        self.years.get(&year)
    }

    /// Descend from a year node through the given labels, one level each.
    ///
    /// Returns `None` as soon as any label is absent, which callers treat as
    /// "no options" rather than an error.
    #[must_use]
    pub fn descend(&self, year: u16, labels: &[&str]) -> Option<&FitmentNode> {
        let mut node = self.year(year)?;
        for label in labels {
            node = node.child(label)?;
        }
        Some(node)
    }

    /// Load a dataset from a parsed JSON value.
    ///
    /// A successful load also resets the degradation-warning record, since
    /// warnings about the previous dataset's contents no longer apply.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the root is not a year-keyed object or any
    /// node below it has an unsupported shape.
    pub fn from_json(value: &Value) -> Result<Self, DataError> {
        let entries = value.as_object().ok_or(DataError::RootShape)?;
        let mut years = BTreeMap::new();
        for (key, node) in entries {
            let year: u16 = key
                .parse()
                .map_err(|_| DataError::YearKey(key.clone()))?;
            let _ = years.insert(year, FitmentNode::from_value(node, key)?);
        }
        axle_common::warning::clear_warnings();
        Ok(Self { years })
    }

    /// Load a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the text is not valid JSON or the shape is
    /// not a well-formed fitment dataset.
    pub fn from_json_str(text: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Overlay another dataset onto this one, year by year.
    ///
    /// An incoming year replaces any existing subtree for that year, matching
    /// the root-level overwrite semantics of the original data feed. The
    /// degradation-warning record is reset along with the data.
    pub fn merge(&mut self, other: Self) {
        for (year, node) in other.years {
            let _ = self.years.insert(year, node);
        }
        axle_common::warning::clear_warnings();
    }
}

impl<'de> Deserialize<'de> for FitmentTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(D::Error::custom)
    }
}
