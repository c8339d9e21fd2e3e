//! Wire response types from the optimization service (`POST /optimize`).
//!
//! The service response carries more fields than this crate consumes
//! (per-piece cut types, unit prices, reused-length totals); unknown fields
//! are ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One piece cut from a rod or a leftover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPiece {
    pub length: f64,
}

/// Code and description of the material a detail entry refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// One line item's packing outcome.
///
/// Multiple details may share the same material code (one per originating
/// cut request line); aggregation by code happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDetail {
    /// The service nests code/description under a field that shares the
    /// name of the surrounding array.
    #[serde(rename = "material_details")]
    pub material: MaterialInfo,
    pub total_length: f64,
    pub total_rods_required: u32,
    pub total_wastage: f64,
    pub total_price_per_ft: f64,
    pub total_price_per_rod: f64,
    /// Pieces cut from each fresh rod, one inner list per rod.
    #[serde(default)]
    pub rods_used: Vec<Vec<CutPiece>>,
    /// Remainder of each rod, index-aligned with `rods_used`.
    #[serde(default)]
    pub leftovers: Vec<f64>,
    /// Pieces cut from previously recorded leftover stock.
    #[serde(default)]
    pub reused_material: Vec<CutPiece>,
    /// Source leftover index for each reused piece. Absent when the
    /// optimizer does not track sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reused_sources: Option<Vec<usize>>,
}

/// Full optimization outcome for a submitted request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub total_unique_materials: u32,
    pub total_rods_used: u32,
    pub total_wastage: f64,
    pub total_project_price_per_rod: f64,
    pub total_project_price_per_ft: f64,
    pub total_wastage_cost: f64,
    pub material_details: Vec<MaterialDetail>,
    /// Leftover stock remaining per material code after packing all
    /// requests. Informational; not consumed by the compiler.
    #[serde(default)]
    pub available_leftovers: BTreeMap<String, Vec<f64>>,
}
