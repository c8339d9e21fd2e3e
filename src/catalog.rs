//! Material catalog built from the `/product-options` payload.
//!
//! The payload keys categories with free-text names (`"80mm OutFrames"`,
//! `"Sliding NetSash Profiles"` and the like), so membership is decided by
//! substring match. That match runs exactly once, at load time, into an
//! enum-keyed map; every lookup after that is exact.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{PlanError, Result};

/// Material category inside a window-type subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    OuterFrame,
    Border,
    InnerFrame,
    Beading,
    NetSash,
    Mullion,
}

impl Category {
    /// All categories, in catalog display order.
    pub const ALL: [Category; 6] = [
        Category::OuterFrame,
        Category::Border,
        Category::InnerFrame,
        Category::Beading,
        Category::NetSash,
        Category::Mullion,
    ];

    /// Substring the catalog's free-text category keys are matched against.
    ///
    /// Keys may add prefixes or suffixes (`"80mm OutFrames"`); exact-match
    /// would stop resolving those entries.
    pub fn key_token(&self) -> &'static str {
        match self {
            Category::OuterFrame => "OutFrames",
            Category::Border => "Border",
            Category::InnerFrame => "Inframes",
            Category::Beading => "Beading",
            Category::NetSash => "NetSash",
            Category::Mullion => "Mullions",
        }
    }

    /// Check whether a raw category key belongs to this category.
    pub fn matches_key(&self, key: &str) -> bool {
        key.contains(self.key_token())
    }
}

/// One material record from the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Product Description")]
    pub description: String,
    #[serde(rename = "Rate/ft (PKR)")]
    pub rate_per_ft: f64,
}

/// Raw payload shape: company -> window type -> category key -> entries.
type RawCatalog = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<CatalogEntry>>>>;

/// Categories resolved for one window type.
#[derive(Debug, Default)]
struct WindowTypeCatalog {
    categories: HashMap<Category, Vec<CatalogEntry>>,
}

/// Read-only material lookup keyed by company, window type, and category.
#[derive(Debug, Default)]
pub struct MaterialCatalog {
    companies: BTreeMap<String, BTreeMap<String, WindowTypeCatalog>>,
}

impl MaterialCatalog {
    /// Build a catalog from the raw `/product-options` JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Ok(Self::resolve(raw))
    }

    /// Build a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn resolve(raw: RawCatalog) -> Self {
        let mut companies = BTreeMap::new();

        for (company, window_types) in raw {
            let mut resolved_types = BTreeMap::new();

            for (window_type, raw_categories) in window_types {
                let mut wt = WindowTypeCatalog::default();

                // A category may span several raw keys; entries concatenate
                // in key order.
                for (key, entries) in &raw_categories {
                    for category in Category::ALL {
                        if category.matches_key(key) {
                            wt.categories
                                .entry(category)
                                .or_insert_with(Vec::new)
                                .extend(entries.iter().cloned());
                        }
                    }
                }

                resolved_types.insert(window_type, wt);
            }

            companies.insert(company, resolved_types);
        }

        Self { companies }
    }

    /// All company names, sorted.
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }

    /// Check whether a company exists in the catalog.
    pub fn has_company(&self, company: &str) -> bool {
        self.companies.contains_key(company)
    }

    /// Check whether a window type exists under a company.
    pub fn has_window_type(&self, company: &str, window_type: &str) -> bool {
        self.companies
            .get(company)
            .is_some_and(|types| types.contains_key(window_type))
    }

    /// All entries for one category under a company/window type.
    pub fn entries(&self, company: &str, window_type: &str, category: Category) -> &[CatalogEntry] {
        self.companies
            .get(company)
            .and_then(|types| types.get(window_type))
            .and_then(|wt| wt.categories.get(&category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find one entry by code within a company/window type/category.
    pub fn lookup(
        &self,
        company: &str,
        window_type: &str,
        category: Category,
        code: &str,
    ) -> Option<&CatalogEntry> {
        self.entries(company, window_type, category)
            .iter()
            .find(|entry| entry.code == code)
    }

    /// Description for a code, or `"Unknown"` when the code is absent.
    pub fn description(
        &self,
        company: &str,
        window_type: &str,
        category: Category,
        code: &str,
    ) -> &str {
        self.lookup(company, window_type, category, code)
            .map(|entry| entry.description.as_str())
            .unwrap_or("Unknown")
    }

    /// Find an entry by code anywhere under a company, scanning every
    /// window type and category.
    pub fn find_by_code(&self, company: &str, code: &str) -> Option<&CatalogEntry> {
        let types = self.companies.get(company)?;
        types
            .values()
            .flat_map(|wt| wt.categories.values())
            .flat_map(|entries| entries.iter())
            .find(|entry| entry.code == code)
    }

    /// Validate that a configuration's company and window type resolve.
    pub fn require_window_type(&self, company: &str, window_type: &str) -> Result<()> {
        if !self.has_company(company) {
            return Err(PlanError::UnknownCompany {
                company: company.to_string(),
            });
        }
        if !self.has_window_type(company, window_type) {
            return Err(PlanError::UnknownWindowType {
                company: company.to_string(),
                window_type: window_type.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "WizPlas": {
            "sliding": {
                "80mm Sliding OutFrames": [
                    {"Code": "SP-2001", "Product Description": "80mm Sliding Frame Premium", "Rate/ft (PKR)": 95.0, "Rate/19 ft Length (PKR)": 1805.0}
                ],
                "Sliding Border Profiles": [
                    {"Code": "AUX-4021", "Product Description": "T-Closing/Border Profile", "Rate/ft (PKR)": 40.0}
                ],
                "Sliding Inframes 80": [
                    {"Code": "SP-2012", "Product Description": "55mm Sliding Sash 80 series", "Rate/ft (PKR)": 70.0}
                ],
                "Beading (Round)": [
                    {"Code": "SP-2022", "Product Description": "Sliding Beading Single Glass", "Rate/ft (PKR)": 25.0}
                ],
                "NetSash 80/88": [
                    {"Code": "SP-2014", "Product Description": "Sliding Net Sash 80/88 series", "Rate/ft (PKR)": 55.0}
                ],
                "Fixed Mullions": [
                    {"Code": "SP-2003", "Product Description": "Fixed Mullion 80 series", "Rate/ft (PKR)": 60.0}
                ]
            }
        }
    }"#;

    #[test]
    fn test_substring_category_resolution() {
        let catalog = MaterialCatalog::from_json(SAMPLE).unwrap();
        // Suffixed/prefixed keys still resolve.
        assert_eq!(
            catalog
                .lookup("WizPlas", "sliding", Category::OuterFrame, "SP-2001")
                .unwrap()
                .description,
            "80mm Sliding Frame Premium"
        );
        assert_eq!(
            catalog
                .lookup("WizPlas", "sliding", Category::NetSash, "SP-2014")
                .unwrap()
                .rate_per_ft,
            55.0
        );
    }

    #[test]
    fn test_description_falls_back_to_unknown() {
        let catalog = MaterialCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(
            catalog.description("WizPlas", "sliding", Category::Border, "NOPE"),
            "Unknown"
        );
        assert_eq!(
            catalog.description("NoCo", "sliding", Category::Border, "AUX-4021"),
            "Unknown"
        );
    }

    #[test]
    fn test_find_by_code_scans_all_categories() {
        let catalog = MaterialCatalog::from_json(SAMPLE).unwrap();
        let entry = catalog.find_by_code("WizPlas", "SP-2003").unwrap();
        assert_eq!(entry.description, "Fixed Mullion 80 series");
        assert!(catalog.find_by_code("WizPlas", "XX-0000").is_none());
    }

    #[test]
    fn test_require_window_type() {
        let catalog = MaterialCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.require_window_type("WizPlas", "sliding").is_ok());
        assert!(matches!(
            catalog.require_window_type("WizPlas", "casement"),
            Err(PlanError::UnknownWindowType { .. })
        ));
        assert!(matches!(
            catalog.require_window_type("NoCo", "sliding"),
            Err(PlanError::UnknownCompany { .. })
        ));
    }

    #[test]
    fn test_multiple_keys_per_category_concatenate() {
        let json = r#"{
            "Co": {
                "fixed": {
                    "Beading (Round)": [
                        {"Code": "B1", "Product Description": "Round", "Rate/ft (PKR)": 10.0}
                    ],
                    "Beading (Square)": [
                        {"Code": "B2", "Product Description": "Square", "Rate/ft (PKR)": 12.0}
                    ]
                }
            }
        }"#;
        let catalog = MaterialCatalog::from_json(json).unwrap();
        let entries = catalog.entries("Co", "fixed", Category::Beading);
        assert_eq!(entries.len(), 2);
        assert!(catalog.lookup("Co", "fixed", Category::Beading, "B2").is_some());
    }
}
