//! Result aggregation: group per-line packing outcomes by material code.
//!
//! The optimizer reports one [`MaterialDetail`] per request line, so a code
//! ordered for several windows (or several sections) appears several times.
//! Rendering wants one card per code: totals summed across the group, rod
//! and reused-piece data kept per detail so each detail's rod-to-leftover
//! index pairing survives.

use std::collections::HashMap;
use tracing::warn;

use crate::model::{CutPiece, OptimizationResult};

/// Rod and reuse data from one detail entry.
///
/// `leftovers[i]` belongs to `rods_used[i]` within this detail only; the
/// correspondence is not global across a group.
#[derive(Debug, Clone, Default)]
pub struct CutDetail {
    pub rods_used: Vec<Vec<CutPiece>>,
    pub leftovers: Vec<f64>,
    pub reused_material: Vec<CutPiece>,
    pub reused_sources: Option<Vec<usize>>,
}

impl CutDetail {
    /// Total length of reused pieces in this detail.
    pub fn reused_length(&self) -> f64 {
        self.reused_material.iter().map(|p| p.length).sum()
    }
}

/// One material code's combined packing outcome.
#[derive(Debug, Clone, Default)]
pub struct AggregatedMaterial {
    pub code: String,
    /// Representative description: the first entry's. Divergent
    /// descriptions within a group are logged, not reconciled.
    pub description: String,
    pub total_length: f64,
    pub total_rods_required: u32,
    pub total_wastage: f64,
    pub total_price_per_ft: f64,
    pub total_price_per_rod: f64,
    pub details: Vec<CutDetail>,
}

impl AggregatedMaterial {
    /// Total reused length across all details in this group.
    pub fn reused_length(&self) -> f64 {
        self.details.iter().map(CutDetail::reused_length).sum()
    }

    /// Display title: description when present, code otherwise.
    pub fn title(&self) -> &str {
        if self.description.is_empty() {
            &self.code
        } else {
            &self.description
        }
    }
}

/// Group a result's material details by code, in first-encounter order.
///
/// Codes present only in `available_leftovers` do not form groups; the
/// leftover pool is rendered straight from the result, so nothing is lost
/// by grouping here.
pub fn aggregate(result: &OptimizationResult) -> Vec<AggregatedMaterial> {
    let mut groups: Vec<AggregatedMaterial> = Vec::new();
    let mut index_by_code: HashMap<String, usize> = HashMap::new();

    for detail in &result.material_details {
        let code = &detail.material.code;
        let idx = *index_by_code.entry(code.clone()).or_insert_with(|| {
            groups.push(AggregatedMaterial {
                code: code.clone(),
                description: detail.material.description.clone(),
                ..Default::default()
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        if !detail.material.description.is_empty()
            && detail.material.description != group.description
        {
            warn!(
                code = %code,
                kept = %group.description,
                seen = %detail.material.description,
                "divergent descriptions for one material code; keeping the first"
            );
        }

        group.total_length += detail.total_length;
        group.total_rods_required += detail.total_rods_required;
        group.total_wastage += detail.total_wastage;
        group.total_price_per_ft += detail.total_price_per_ft;
        group.total_price_per_rod += detail.total_price_per_rod;
        group.details.push(CutDetail {
            rods_used: detail.rods_used.clone(),
            leftovers: detail.leftovers.clone(),
            reused_material: detail.reused_material.clone(),
            reused_sources: detail.reused_sources.clone(),
        });
    }

    groups
}
