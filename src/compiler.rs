//! Configuration compiler: nested window designs to flat material cut lists.
//!
//! Each window configuration becomes one [`CutRequest`] whose `materials`
//! list the optimizer packs onto rods. Emission order is fixed: outer frame,
//! border, then per inner section (inner frame, beading, net sash), then
//! mullions. Mullions are linear cuts; their length comes from whichever
//! outer-frame dimension the orientation selects, carried in `divider` with
//! height and width zeroed.

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::model::{CutRequest, MaterialLineItem, WindowConfiguration};

/// Compile all window configurations into cut requests, in input order.
pub fn compile(configs: &[WindowConfiguration]) -> Result<Vec<CutRequest>> {
    if configs.is_empty() {
        return Err(PlanError::NoConfigurations);
    }

    configs
        .iter()
        .enumerate()
        .map(|(idx, config)| compile_one(config, idx + 1))
        .collect()
}

/// Compile a single window configuration.
///
/// `window` is the 1-based position used in error messages.
pub fn compile_one(config: &WindowConfiguration, window: usize) -> Result<CutRequest> {
    validate(config, window)?;

    let frame = &config.outer_frame;
    let mut materials = Vec::new();

    // Outer frame.
    materials.push(MaterialLineItem::rectangular(
        frame.code.clone(),
        frame.height,
        frame.width,
        config.quantity,
    ));

    // Border shares the outer perimeter's footprint.
    if let Some(border) = &config.border {
        materials.push(MaterialLineItem::rectangular(
            border.code.clone(),
            frame.height,
            frame.width,
            config.quantity,
        ));
    }

    for section in &config.inner_sections {
        materials.push(MaterialLineItem::rectangular(
            section.in_frame_code.clone(),
            section.height,
            section.width,
            config.quantity,
        ));
        materials.push(MaterialLineItem::rectangular(
            section.beading_code.clone(),
            section.height,
            section.width,
            config.quantity,
        ));
        if let Some(net_sash) = &section.net_sash_code {
            materials.push(MaterialLineItem::rectangular(
                net_sash.clone(),
                section.height,
                section.width,
                config.quantity,
            ));
        }
    }

    if let Some(mullions) = &config.mullions {
        for mullion in mullions {
            materials.push(MaterialLineItem::divider(
                mullion.material_code.clone(),
                mullion.divider_length(frame),
                mullion.count * config.quantity,
            ));
        }
    }

    debug!(
        window,
        lines = materials.len(),
        dividers = config.mullion_count() * config.quantity,
        company = %config.company,
        "compiled window configuration"
    );

    Ok(CutRequest {
        company: config.company.clone(),
        quantity: config.quantity,
        window_type: config.window_type.clone(),
        materials,
    })
}

/// Reject malformed configurations instead of emitting degenerate lines.
///
/// Upstream collection is expected to validate field by field; this is the
/// compiler's own gate and performs no clamping or defaulting.
fn validate(config: &WindowConfiguration, window: usize) -> Result<()> {
    require_code(window, "company", &config.company)?;
    require_code(window, "window_type", &config.window_type)?;

    if config.quantity == 0 {
        return Err(PlanError::NonPositive {
            window,
            field: "quantity".into(),
            value: 0.0,
        });
    }

    require_positive(window, "outer_frame.height", config.outer_frame.height)?;
    require_positive(window, "outer_frame.width", config.outer_frame.width)?;
    require_code(window, "outer_frame.code", &config.outer_frame.code)?;

    if let Some(border) = &config.border {
        require_code(window, "border.code", &border.code)?;
    }

    if config.inner_sections.is_empty() {
        return Err(PlanError::NoInnerSections { window });
    }

    for (idx, section) in config.inner_sections.iter().enumerate() {
        let label = |field: &str| format!("inner_sections[{idx}].{field}");
        require_positive(window, &label("height"), section.height)?;
        require_positive(window, &label("width"), section.width)?;
        require_code(window, &label("in_frame_code"), &section.in_frame_code)?;
        require_code(window, &label("beading_code"), &section.beading_code)?;
        if let Some(net_sash) = &section.net_sash_code {
            require_code(window, &label("net_sash_code"), net_sash)?;
        }
    }

    if let Some(mullions) = &config.mullions {
        if mullions.is_empty() {
            return Err(PlanError::EmptyMullions { window });
        }
        for (idx, mullion) in mullions.iter().enumerate() {
            if mullion.count == 0 {
                return Err(PlanError::NonPositive {
                    window,
                    field: format!("mullions[{idx}].count"),
                    value: 0.0,
                });
            }
            require_code(
                window,
                &format!("mullions[{idx}].material"),
                &mullion.material_code,
            )?;
        }
    }

    Ok(())
}

fn require_code(window: usize, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlanError::MissingField {
            window,
            field: field.to_string(),
        });
    }
    Ok(())
}

fn require_positive(window: usize, field: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(PlanError::NonPositive {
            window,
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
