//! Window configuration summary cards, resolved against the catalog.

use tracing::warn;

use crate::catalog::{Category, MaterialCatalog};
use crate::error::Result;
use crate::model::WindowConfiguration;
use crate::report::ReportWriter;

/// Render one summary card per window configuration.
///
/// A window whose company or window type does not resolve in the catalog
/// degrades to an error-placeholder card; the remaining windows still
/// render. Codes missing inside a resolved subtree show as `Unknown`.
pub fn render_window_cards(configs: &[WindowConfiguration], catalog: &MaterialCatalog) -> String {
    let mut w = ReportWriter::new();

    for (idx, config) in configs.iter().enumerate() {
        let number = idx + 1;
        match window_card(config, catalog, number) {
            Ok(card) => w.line(card.trim_end()),
            Err(err) => {
                warn!(window = number, error = %err, "window card failed to render");
                w.line(format!("Window {number}"));
                w.line(format!("  [error] {err}"));
                w.line("  Error rendering window configuration. Please check the configuration and try again.");
            }
        }
        w.blank();
    }

    w.take_output()
}

fn window_card(
    config: &WindowConfiguration,
    catalog: &MaterialCatalog,
    number: usize,
) -> Result<String> {
    catalog.require_window_type(&config.company, &config.window_type)?;

    let company = config.company.as_str();
    let window_type = config.window_type.as_str();
    let describe = |category: Category, code: &str| -> String {
        format!(
            "{} ({})",
            catalog.description(company, window_type, category, code),
            code
        )
    };

    let mut w = ReportWriter::new();
    w.line(format!("Window {number}"));
    w.line(format!("  Company:  {company}"));
    w.line(format!("  Type:     {}", display_window_type(window_type)));
    w.line(format!("  Quantity: {}", config.quantity));

    let frame = &config.outer_frame;
    w.line(format!(
        "  Outer Frame Dimensions: {} ft x {} ft",
        frame.height, frame.width
    ));
    w.line(format!(
        "  Outer Frame Material:   {}",
        describe(Category::OuterFrame, &frame.code)
    ));
    if let Some(border) = &config.border {
        w.line(format!(
            "  Border Material:        {}",
            describe(Category::Border, &border.code)
        ));
    }

    if !config.inner_sections.is_empty() {
        w.line("  Inner Sections:");
        for (idx, section) in config.inner_sections.iter().enumerate() {
            w.line(format!(
                "    Section {}: {} ft x {} ft",
                idx + 1,
                section.height,
                section.width
            ));
            w.line(format!(
                "      Inner Frame: {}",
                describe(Category::InnerFrame, &section.in_frame_code)
            ));
            w.line(format!(
                "      Beading:     {}",
                describe(Category::Beading, &section.beading_code)
            ));
            if let Some(net_sash) = &section.net_sash_code {
                w.line(format!(
                    "      Net Sash:    {}",
                    describe(Category::NetSash, net_sash)
                ));
            }
        }
    }

    if let Some(mullions) = config.mullions.as_deref().filter(|m| !m.is_empty()) {
        w.line("  Mullions:");
        for (idx, mullion) in mullions.iter().enumerate() {
            w.line(format!(
                "    Mullion {}: {} mullion(s) along {}",
                idx + 1,
                mullion.count,
                mullion.orientation
            ));
            w.line(format!(
                "      Material: {}",
                describe(Category::Mullion, &mullion.material_code)
            ));
        }
    }

    Ok(w.take_output())
}

/// Display form of a window type key: first letter capitalized, first
/// underscore turned into a space.
fn display_window_type(window_type: &str) -> String {
    let mut chars = window_type.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    capitalized.replacen('_', " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Border, InnerSection, MullionConfig, Orientation, OuterFrame};

    const CATALOG: &str = r#"{
        "WizPlas": {
            "sliding": {
                "Sliding OutFrames": [
                    {"Code": "OF1", "Product Description": "80mm Frame", "Rate/ft (PKR)": 95.0}
                ],
                "Sliding Border": [
                    {"Code": "BR1", "Product Description": "T-Profile", "Rate/ft (PKR)": 40.0}
                ],
                "Sliding Inframes": [
                    {"Code": "IF1", "Product Description": "55mm Sash", "Rate/ft (PKR)": 70.0}
                ],
                "Sliding Beading": [
                    {"Code": "B1", "Product Description": "Round Beading", "Rate/ft (PKR)": 25.0}
                ],
                "Sliding NetSash": [
                    {"Code": "NS1", "Product Description": "Net Sash", "Rate/ft (PKR)": 55.0}
                ],
                "Sliding Mullions": [
                    {"Code": "M1", "Product Description": "Fixed Mullion", "Rate/ft (PKR)": 60.0}
                ]
            }
        }
    }"#;

    fn config() -> WindowConfiguration {
        WindowConfiguration {
            company: "WizPlas".into(),
            window_type: "sliding".into(),
            quantity: 2,
            outer_frame: OuterFrame {
                height: 5.0,
                width: 4.0,
                code: "OF1".into(),
            },
            border: Some(Border { code: "BR1".into() }),
            inner_sections: vec![InnerSection {
                height: 4.8,
                width: 3.8,
                in_frame_code: "IF1".into(),
                beading_code: "B1".into(),
                net_sash_code: Some("NS1".into()),
            }],
            mullions: Some(vec![MullionConfig {
                count: 3,
                orientation: Orientation::Width,
                material_code: "M1".into(),
            }]),
            id: Some(1),
        }
    }

    #[test]
    fn test_card_resolves_descriptions() {
        let catalog = MaterialCatalog::from_json(CATALOG).unwrap();
        let out = render_window_cards(&[config()], &catalog);

        assert!(out.contains("Window 1"));
        assert!(out.contains("Type:     Sliding"));
        assert!(out.contains("80mm Frame (OF1)"));
        assert!(out.contains("T-Profile (BR1)"));
        assert!(out.contains("Net Sash (NS1)"));
        assert!(out.contains("3 mullion(s) along width"));
        assert!(out.contains("Fixed Mullion (M1)"));
    }

    #[test]
    fn test_unknown_code_shows_unknown() {
        let catalog = MaterialCatalog::from_json(CATALOG).unwrap();
        let mut c = config();
        c.inner_sections[0].beading_code = "NOPE".into();

        let out = render_window_cards(&[c], &catalog);
        assert!(out.contains("Unknown (NOPE)"));
    }

    #[test]
    fn test_unresolvable_window_degrades_but_others_render() {
        let catalog = MaterialCatalog::from_json(CATALOG).unwrap();
        let mut broken = config();
        broken.company = "NoSuchCo".into();

        let out = render_window_cards(&[broken, config()], &catalog);
        assert!(out.contains("Window 1"));
        assert!(out.contains("[error]"));
        assert!(out.contains("Error rendering window configuration"));
        assert!(out.contains("Window 2"));
        assert!(out.contains("80mm Frame (OF1)"));
    }

    #[test]
    fn test_display_window_type() {
        assert_eq!(display_window_type("sliding"), "Sliding");
        assert_eq!(display_window_type("tilt_turn"), "Tilt turn");
        assert_eq!(display_window_type(""), "");
    }
}
