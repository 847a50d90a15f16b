// src/models/record.rs

//! Species record data structures.

use serde::{Deserialize, Serialize};

use crate::models::TaxonContext;

/// The four per-page text fields extracted from a species detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesFields {
    /// Russian name from the page heading
    pub rus_name: String,

    /// Latin (scientific) name from the page heading
    pub lat_name: String,

    /// Field-identification text, first article paragraph
    pub signs: String,

    /// Habitat text, second article paragraph
    pub habitat: String,
}

/// A single species record, the unit of output.
///
/// `order` and `family` are the taxonomic context at the time the detail
/// page was visited. They are omitted from the serialized output when no
/// marker of that kind had been seen yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BirdRecord {
    /// Order heading in effect when this page was visited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Family heading in effect when this page was visited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Russian species name
    pub rus_name: String,

    /// Latin species name
    pub lat_name: String,

    /// Identification signs
    pub signs: String,

    /// Habitat description
    pub habitat: String,
}

impl BirdRecord {
    /// Merge a context snapshot with the extracted page fields.
    pub fn from_parts(context: &TaxonContext, fields: SpeciesFields) -> Self {
        Self {
            order: context.order.clone(),
            family: context.family.clone(),
            rus_name: fields.rus_name,
            lat_name: fields.lat_name,
            signs: fields.signs,
            habitat: fields.habitat,
        }
    }
}
