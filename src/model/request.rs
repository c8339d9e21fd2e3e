//! Wire request types for the optimization service (`POST /optimize`).

use serde::{Deserialize, Serialize};

/// One cuttable piece requirement.
///
/// Rectangular pieces carry `height`/`width`; linear pieces (mullion
/// dividers) carry `divider` instead, with height and width set to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLineItem {
    pub code: String,
    pub height: f64,
    pub width: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider: Option<f64>,
}

impl MaterialLineItem {
    /// Create a rectangular line item.
    pub fn rectangular(code: impl Into<String>, height: f64, width: f64, quantity: u32) -> Self {
        Self {
            code: code.into(),
            height,
            width,
            quantity,
            divider: None,
        }
    }

    /// Create a linear divider line item.
    pub fn divider(code: impl Into<String>, length: f64, quantity: u32) -> Self {
        Self {
            code: code.into(),
            height: 0.0,
            width: 0.0,
            quantity,
            divider: Some(length),
        }
    }

    /// Check whether this line is a linear divider cut.
    pub fn is_divider(&self) -> bool {
        self.divider.is_some()
    }
}

/// One compiled window configuration: the flat material list for one design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    pub company: String,
    pub quantity: u32,
    pub window_type: String,
    pub materials: Vec<MaterialLineItem>,
}

/// Request envelope sent to the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub configurations: Vec<CutRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_line_omits_divider() {
        let line = MaterialLineItem::rectangular("OF1", 5.0, 4.0, 1);
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("divider"));
        assert!(!line.is_divider());
    }

    #[test]
    fn test_divider_line_zeroes_dimensions() {
        let line = MaterialLineItem::divider("M1", 4.0, 6);
        assert_eq!(line.height, 0.0);
        assert_eq!(line.width, 0.0);
        assert_eq!(line.divider, Some(4.0));
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"divider\":4.0"));
    }

    #[test]
    fn test_envelope_shape() {
        let req = OptimizationRequest {
            configurations: vec![CutRequest {
                company: "AL-X".into(),
                quantity: 1,
                window_type: "sliding".into(),
                materials: vec![MaterialLineItem::rectangular("OF1", 5.0, 4.0, 1)],
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["configurations"][0]["window_type"] == "sliding");
        assert!(json["configurations"][0]["materials"][0]["code"] == "OF1");
    }
}
