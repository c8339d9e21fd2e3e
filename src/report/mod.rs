//! Text report generation: cutting-plan reports and window summary cards.

mod cards;
mod plan;
mod writer;

pub use cards::render_window_cards;
pub use plan::render_plan;
pub use writer::ReportWriter;
