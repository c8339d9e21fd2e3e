//! Cutting diagram layout: proportional geometry for rods and reused stock.
//!
//! A pure transform from an aggregated material to a renderable model. Each
//! piece becomes a segment with a left offset and a width, both expressed as
//! percent of the rod length; insertion order is draw order and no sorting
//! by size occurs.

use crate::aggregate::{AggregatedMaterial, CutDetail};
use crate::config::{DEFAULT_ROD_LENGTH_FT, REUSED_SCALE_FLOOR_FT};

/// One piece (or leftover remainder) placed on a bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Piece length in feet.
    pub length: f64,
    /// Left offset, percent of the bar.
    pub offset_pct: f64,
    /// Width, percent of the bar.
    pub width_pct: f64,
}

/// Layout of one fresh rod: cut pieces left to right, then the remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct RodLayout {
    pub pieces: Vec<Segment>,
    /// Remainder segment, present when the rod has one.
    pub leftover: Option<Segment>,
}

impl RodLayout {
    /// Remainder length in feet, zero when fully consumed.
    pub fn leftover_length(&self) -> f64 {
        self.leftover.map(|s| s.length).unwrap_or(0.0)
    }
}

/// Layout of pieces cut from one source leftover.
#[derive(Debug, Clone, PartialEq)]
pub struct ReusedLayout {
    /// Source label, e.g. `"Leftover 2"`.
    pub source: String,
    /// Sum of piece lengths in this group.
    pub total_length: f64,
    pub pieces: Vec<Segment>,
}

/// Build rod layouts for every detail in an aggregated material.
///
/// Zero-length entries are padding and excluded; a rod with no qualifying
/// pieces is skipped entirely. The leftover for rod `i` comes from the same
/// detail's `leftovers[i]` when that index exists, else 0.
pub fn build_rod_layouts(material: &AggregatedMaterial, rod_length: f64) -> Vec<RodLayout> {
    let mut layouts = Vec::new();

    for detail in &material.details {
        for (rod_idx, rod) in detail.rods_used.iter().enumerate() {
            let pieces: Vec<f64> = rod
                .iter()
                .map(|p| p.length)
                .filter(|&len| len > 0.0)
                .collect();
            if pieces.is_empty() {
                continue;
            }

            let leftover_len = detail.leftovers.get(rod_idx).copied().unwrap_or(0.0);

            let mut offset = 0.0;
            let mut segments = Vec::with_capacity(pieces.len());
            for length in pieces {
                let width = length / rod_length * 100.0;
                segments.push(Segment {
                    length,
                    offset_pct: offset,
                    width_pct: width,
                });
                offset += width;
            }

            let leftover = (leftover_len > 0.0).then(|| Segment {
                length: leftover_len,
                offset_pct: offset,
                width_pct: leftover_len / rod_length * 100.0,
            });

            layouts.push(RodLayout {
                pieces: segments,
                leftover,
            });
        }
    }

    layouts
}

/// Build rod layouts with the standard 19 ft rod.
pub fn build_rod_layouts_default(material: &AggregatedMaterial) -> Vec<RodLayout> {
    build_rod_layouts(material, DEFAULT_ROD_LENGTH_FT)
}

/// Build reused-material layouts, one per source group, detail by detail.
///
/// The source for piece `idx` is `reused_sources[idx]` when present. When
/// the optimizer omits source tracking the piece's own index stands in as
/// an approximate display fallback, not authoritative attribution. Groups
/// whose pieces sum to zero length are dropped.
pub fn build_reused_layouts(material: &AggregatedMaterial) -> Vec<ReusedLayout> {
    let mut layouts = Vec::new();

    for detail in &material.details {
        if detail.reused_material.is_empty() {
            continue;
        }
        // A group of nothing but zero-length padding is not a real reuse.
        layouts.extend(
            reused_layouts_for_detail(detail)
                .into_iter()
                .filter(|layout| layout.total_length > 0.0),
        );
    }

    layouts
}

fn reused_layouts_for_detail(detail: &CutDetail) -> Vec<ReusedLayout> {
    // Group pieces by source index, first occurrence first.
    let mut order: Vec<usize> = Vec::new();
    let mut groups: Vec<Vec<f64>> = Vec::new();

    for (idx, piece) in detail.reused_material.iter().enumerate() {
        let source = detail
            .reused_sources
            .as_ref()
            .and_then(|sources| sources.get(idx).copied())
            .unwrap_or(idx);

        match order.iter().position(|&s| s == source) {
            Some(pos) => groups[pos].push(piece.length),
            None => {
                order.push(source);
                groups.push(vec![piece.length]);
            }
        }
    }

    order
        .into_iter()
        .zip(groups)
        .map(|(source, lengths)| {
            let total_length: f64 = lengths.iter().sum();
            // Floor keeps a lone small piece from filling the whole bar.
            let scale = total_length.max(REUSED_SCALE_FLOOR_FT);

            let mut offset = 0.0;
            let pieces = lengths
                .into_iter()
                .map(|length| {
                    let width = length / scale * 100.0;
                    let segment = Segment {
                        length,
                        offset_pct: offset,
                        width_pct: width,
                    };
                    offset += width;
                    segment
                })
                .collect();

            ReusedLayout {
                source: format!("Leftover {}", source + 1),
                total_length,
                pieces,
            }
        })
        .collect()
}
