//! cutplan - Compile window configurations into cutting requests and render
//! optimizer cutting plans.
//!
//! The crate covers the two ends of the cutting-stock pipeline: turning a
//! nested window design (outer frame, optional border, glazed inner
//! sections, mullion dividers) into the flat material list the optimization
//! service packs onto rods, and turning the service's packing result back
//! into an aggregated, per-material cutting plan with proportional rod
//! diagrams. The packing algorithm itself lives behind the service
//! boundary; this crate owns the wire contract with it.
//!
//! # Example
//!
//! ```no_run
//! use cutplan::{compile_request, render_plan_report, OptimizationResult, WindowConfiguration};
//! use std::fs;
//!
//! let configs: Vec<WindowConfiguration> =
//!     serde_json::from_str(&fs::read_to_string("windows.json").unwrap()).unwrap();
//! let request = compile_request(&configs).unwrap();
//! println!("{}", serde_json::to_string_pretty(&request).unwrap());
//!
//! let result: OptimizationResult =
//!     serde_json::from_str(&fs::read_to_string("result.json").unwrap()).unwrap();
//! println!("{}", render_plan_report(&result, 19.0));
//! ```

pub mod aggregate;
pub mod catalog;
pub mod compiler;
pub mod config;
pub mod diagram;
pub mod error;
pub mod model;
pub mod report;

// Re-exports for convenience
pub use aggregate::{aggregate, AggregatedMaterial, CutDetail};
pub use catalog::{CatalogEntry, Category, MaterialCatalog};
pub use compiler::compile;
pub use config::DEFAULT_ROD_LENGTH_FT;
pub use diagram::{build_reused_layouts, build_rod_layouts, ReusedLayout, RodLayout, Segment};
pub use error::{ErrorKind, PlanError, Result};
pub use model::{
    CutRequest, MaterialLineItem, OptimizationRequest, OptimizationResult, WindowConfiguration,
};
pub use report::{render_plan, render_window_cards};

/// Compile window configurations into the request envelope for the
/// optimization service.
pub fn compile_request(configs: &[WindowConfiguration]) -> Result<OptimizationRequest> {
    Ok(OptimizationRequest {
        configurations: compile(configs)?,
    })
}

/// Render the full cutting-plan report for an optimization result.
///
/// This is the high-level render pipeline: aggregate details by material
/// code, build rod and reused-material layouts, and format the report.
pub fn render_plan_report(result: &OptimizationResult, rod_length: f64) -> String {
    report::render_plan(result, rod_length)
}
