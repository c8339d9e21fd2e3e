//! Cutting-plan report: totals, per-material cards, rod bars, leftover pool.

use tracing::warn;

use crate::aggregate::{aggregate, AggregatedMaterial};
use crate::config::{MAX_REPORT_LENGTH_FT, ROD_BAR_WIDTH};
use crate::diagram::{build_reused_layouts, build_rod_layouts, Segment};
use crate::error::{PlanError, Result};
use crate::model::OptimizationResult;
use crate::report::ReportWriter;

/// Render the full cutting-plan report for an optimization result.
///
/// A material card that fails to build degrades to an error line inside its
/// own card; the remaining cards and the leftover pool still render.
pub fn render_plan(result: &OptimizationResult, rod_length: f64) -> String {
    let mut w = ReportWriter::new();

    w.heading("OPTIMIZATION RESULTS");
    w.field("Unique Materials", result.total_unique_materials);
    w.field("Total Rods Used", result.total_rods_used);
    w.field("Total Wastage (ft)", format!("{:.2}", result.total_wastage));
    w.field(
        "Cost Per Rod (PKR)",
        format!("{:.2}", result.total_project_price_per_rod),
    );
    w.field(
        "Cost Per Ft (PKR)",
        format!("{:.2}", result.total_project_price_per_ft),
    );
    w.field(
        "Wastage Cost (PKR)",
        format!("{:.2}", result.total_wastage_cost),
    );
    w.blank();

    w.section("MATERIAL DETAILS");
    w.line("Legend: == new cut piece   .. leftover   ~~ reused");
    w.blank();

    for group in aggregate(result) {
        match material_card(&group, rod_length) {
            Ok(card) => w.line(card.trim_end()),
            Err(err) => {
                warn!(code = %group.code, error = %err, "material card failed to render");
                w.line(format!("Material: {} ({})", group.title(), group.code));
                w.line(format!("  [error] {err}"));
            }
        }
        w.blank();
    }

    let has_leftovers = !result.available_leftovers.is_empty();
    if has_leftovers {
        w.section("AVAILABLE LEFTOVERS");
        for (code, leftovers) in &result.available_leftovers {
            if leftovers.is_empty() {
                continue;
            }
            let lengths: Vec<String> = leftovers.iter().map(|l| format!("{l:.2} ft")).collect();
            w.line(format!("{code}: {}", lengths.join(", ")));
        }
    }

    w.take_output()
}

/// Render one aggregated material's card.
fn material_card(group: &AggregatedMaterial, rod_length: f64) -> Result<String> {
    if !rod_length.is_finite() || rod_length <= 0.0 {
        return Err(PlanError::InvalidRodLength { value: rod_length });
    }
    check_lengths(group)?;

    let mut w = ReportWriter::new();

    w.line(format!("Material: {} ({})", group.title(), group.code));
    w.line(format!("  Total Material Length: {:.2} ft", group.total_length));
    w.line(format!("  Rods Required:         {}", group.total_rods_required));
    w.line(format!("  Wastage:               {:.2} ft", group.total_wastage));
    w.line(format!(
        "  Price Per Ft Basis:    PKR {:.2}",
        group.total_price_per_ft
    ));
    w.line(format!(
        "  Price Per Rod Basis:   PKR {:.2}",
        group.total_price_per_rod
    ));

    let rods = build_rod_layouts(group, rod_length);
    w.line("  Rod Cutting Details:");
    if rods.is_empty() {
        w.line("    No new rods used for this material.");
    } else {
        for (idx, rod) in rods.iter().enumerate() {
            w.line(format!(
                "    Rod {}: {}",
                idx + 1,
                render_bar(&rod.pieces, rod.leftover.as_ref())
            ));
        }
    }

    let reused = build_reused_layouts(group);
    if !reused.is_empty() {
        w.line("  Reused Material:");
        for layout in &reused {
            w.line(format!(
                "    {} - {:.2} ft used",
                layout.source, layout.total_length
            ));
            w.line(format!("      {}", render_reused_bar(&layout.pieces)));
        }
    }

    Ok(w.take_output())
}

/// Non-finite or absurdly large lengths come from malformed service data;
/// the card for that material degrades rather than poisoning the whole
/// report.
fn check_lengths(group: &AggregatedMaterial) -> Result<()> {
    let totals = [
        group.total_length,
        group.total_wastage,
        group.total_price_per_ft,
        group.total_price_per_rod,
    ];
    let lengths = group.details.iter().flat_map(|d| {
        d.rods_used
            .iter()
            .flatten()
            .chain(d.reused_material.iter())
            .map(|p| p.length)
            .chain(d.leftovers.iter().copied())
    });

    let in_range = |v: f64| v.is_finite() && v.abs() <= MAX_REPORT_LENGTH_FT;
    if totals.into_iter().chain(lengths).all(in_range) {
        Ok(())
    } else {
        Err(PlanError::MaterialRender {
            code: group.code.clone(),
            message: "non-finite or out-of-range length in optimizer data".into(),
        })
    }
}

/// Render one rod as a proportional bar: pieces then the leftover.
fn render_bar(pieces: &[Segment], leftover: Option<&Segment>) -> String {
    let mut bar = String::from("|");
    for piece in pieces {
        bar.push_str(&cell(piece, '='));
        bar.push('|');
    }
    if let Some(leftover) = leftover {
        bar.push_str(&cell(leftover, '.'));
        bar.push('|');
    }
    bar
}

/// Render one reused-source group as a proportional bar.
fn render_reused_bar(pieces: &[Segment]) -> String {
    let mut bar = String::from("|");
    for piece in pieces {
        bar.push_str(&cell(piece, '~'));
        bar.push('|');
    }
    bar
}

/// One segment cell: the length label centered in a span proportional to
/// the segment's percent width.
fn cell(segment: &Segment, filler: char) -> String {
    let label = format!("{:.1}", segment.length);
    // The cast saturates, so an oversized width_pct must be capped before it
    // turns into a repeat count.
    let span = (segment.width_pct / 100.0 * ROD_BAR_WIDTH as f64).round() as usize;
    let span = span.min(ROD_BAR_WIDTH).max(label.len() + 2);

    let pad = span - label.len();
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{}{}{}",
        filler.to_string().repeat(left),
        label,
        filler.to_string().repeat(right)
    )
}
