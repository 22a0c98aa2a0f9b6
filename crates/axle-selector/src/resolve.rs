//! Resolution of a completed selection.
//!
//! Once all seven fields are assigned, two things are derived: a redirect URL
//! (from the dataset's `redirectUrls` side maps plus query parameters) and a
//! compatibility classification against a caller-supplied fitment list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use url::form_urlencoded;

use crate::config::VehicleConfig;
use crate::error::SelectorError;
use crate::selection::{Selection, UNKNOWN};
use axle_fitment::{Field, FitmentNode, FitmentTree};

/// How a completed selection compares against a compatibility list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// All seven fields equal a compatibility entry.
    Perfect,
    /// Year, make, and model match an entry but a deeper field differs.
    Partial,
    /// No entry matches on year, make, and model (or no list was supplied).
    None,
}

/// One full seven-field record of a known-compatible vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    /// Model year label.
    pub year: String,
    /// Manufacturer name.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Submodel/trim name.
    pub submodel: String,
    /// Chassis style.
    pub chassis: String,
    /// Engine description.
    pub engine: String,
    /// Transmission label.
    pub transmission: String,
}

impl CompatibilityEntry {
    /// The entry's value for a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Year => &self.year,
            Field::Make => &self.make,
            Field::Model => &self.model,
            Field::Submodel => &self.submodel,
            Field::Chassis => &self.chassis,
            Field::Engine => &self.engine,
            Field::Transmission => &self.transmission,
        }
    }

    fn matches_identity(&self, selection: &Selection) -> bool {
        [Field::Year, Field::Make, Field::Model]
            .iter()
            .all(|field| selection.get(*field) == Some(self.get(*field)))
    }

    fn matches_exactly(&self, selection: &Selection) -> bool {
        Field::ALL
            .iter()
            .all(|field| selection.get(*field) == Some(self.get(*field)))
    }
}

/// The result of resolving a completed selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Snapshot of the resolved configuration.
    pub values: VehicleConfig,
    /// The redirect URL, or `None` when resolution failed to produce one.
    pub redirect_url: Option<String>,
    /// Compatibility classification against the caller's list.
    pub match_type: MatchType,
    /// Human-readable summary of the configuration, sentinel excluded.
    pub summary: String,
}

/// Classify a selection against a compatibility list.
///
/// The first entry matching on year, make, and model decides the result:
/// exact on all seven fields is [`MatchType::Perfect`], anything else is
/// [`MatchType::Partial`]. The scan deliberately stops at that first identity
/// match even if a later entry would match perfectly; this mirrors the
/// observed behavior of the original feed.
#[must_use]
pub fn classify(selection: &Selection, entries: &[CompatibilityEntry]) -> MatchType {
    for entry in entries {
        if entry.matches_identity(selection) {
            return if entry.matches_exactly(selection) {
                MatchType::Perfect
            } else {
                MatchType::Partial
            };
        }
    }
    MatchType::None
}

/// Build the redirect URL for a completed selection.
///
/// The base comes from the model-level `redirectUrls` map, overlaid with the
/// selected submodel's own map when it has one (submodel entries win), keyed
/// by `context` with `default` as the fallback. Query parameters carry the
/// year and the non-sentinel drilldown values; make and model are implied by
/// the base path. A `reference` already in `key=value&...` form is spliced in
/// pair by pair instead of nested under a single `ref` key.
///
/// # Errors
///
/// [`SelectorError::Validation`] if year, make, or model is unset;
/// [`SelectorError::DataLookup`] if one of them is missing from the dataset;
/// [`SelectorError::NoRedirectUrl`] if neither `context` nor `default` is in
/// the merged redirect map.
pub fn resolve_url(
    selection: &Selection,
    tree: &FitmentTree,
    context: &str,
    reference: Option<&str>,
) -> Result<String, SelectorError> {
    let model_node = lookup_model(selection, tree)?;

    let mut redirects: BTreeMap<String, String> =
        model_node.redirect_urls().cloned().unwrap_or_default();
    if let Some(submodel) = selection.get(Field::Submodel)
        && submodel != UNKNOWN
        && let Some(overrides) = model_node.child(submodel).and_then(|n| n.redirect_urls())
    {
        for (key, value) in overrides {
            let _ = redirects.insert(key.clone(), value.clone());
        }
    }

    let base = redirects
        .get(context)
        .or_else(|| redirects.get("default"))
        .ok_or_else(|| SelectorError::NoRedirectUrl {
            context: context.to_string(),
        })?;
    let mut url = base.clone();
    if !url.ends_with('/') {
        url.push('/');
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    for field in [
        Field::Year,
        Field::Submodel,
        Field::Chassis,
        Field::Engine,
        Field::Transmission,
    ] {
        if let Some(value) = selection.get(field)
            && value != UNKNOWN
        {
            let _ = query.append_pair(&field.to_string(), value);
        }
    }
    if let Some(reference) = reference.filter(|r| !r.is_empty()) {
        if reference.contains('=') {
            for (key, value) in form_urlencoded::parse(reference.as_bytes()) {
                let _ = query.append_pair(&key, &value);
            }
        } else {
            let _ = query.append_pair("ref", reference);
        }
    }

    let query = query.finish();
    if query.is_empty() {
        Ok(url)
    } else {
        Ok(format!("{url}?{query}"))
    }
}

/// Walk year → make → model, failing loudly on a missing key.
///
/// A missing key here means the tree changed underneath a completed
/// selection, which resolution must surface rather than paper over.
fn lookup_model<'t>(
    selection: &Selection,
    tree: &'t FitmentTree,
) -> Result<&'t FitmentNode, SelectorError> {
    let year_label = required(selection, Field::Year)?;
    let make_label = required(selection, Field::Make)?;
    let model_label = required(selection, Field::Model)?;

    let year: u16 = year_label.parse().map_err(|_| SelectorError::DataLookup {
        field: Field::Year,
        label: year_label.to_string(),
    })?;
    let year_node = tree.year(year).ok_or_else(|| SelectorError::DataLookup {
        field: Field::Year,
        label: year_label.to_string(),
    })?;
    let make_node = year_node
        .child(make_label)
        .ok_or_else(|| SelectorError::DataLookup {
            field: Field::Make,
            label: make_label.to_string(),
        })?;
    make_node
        .child(model_label)
        .ok_or_else(|| SelectorError::DataLookup {
            field: Field::Model,
            label: model_label.to_string(),
        })
}

fn required(selection: &Selection, field: Field) -> Result<&str, SelectorError> {
    selection
        .get(field)
        .ok_or_else(|| SelectorError::Validation(format!("resolution requires {field} to be set")))
}
