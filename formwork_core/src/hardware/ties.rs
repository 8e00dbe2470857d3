//! Form Tie Hardware
//!
//! Tie types and the capacity catalog used to size tie spacing. Capacities
//! are in pounds before the safety factor is applied.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::Pounds;

/// Standard form tie types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieType {
    /// Snap tie, 3k nominal
    #[serde(rename = "Snap-Tie")]
    SnapTie,
    /// She-bolt assembly, 5k nominal
    #[serde(rename = "She-Bolt")]
    SheBolt,
    /// Taper tie, 7.5k nominal
    #[serde(rename = "Taper-Tie")]
    TaperTie,
}

impl TieType {
    /// All tie variants for selection lists
    pub const ALL: [TieType; 3] = [TieType::SnapTie, TieType::SheBolt, TieType::TaperTie];

    /// Canonical catalog name (e.g., "Snap-Tie")
    pub fn name(&self) -> &'static str {
        match self {
            TieType::SnapTie => "Snap-Tie",
            TieType::SheBolt => "She-Bolt",
            TieType::TaperTie => "Taper-Tie",
        }
    }

    /// Nominal rating as stamped by suppliers
    pub fn nominal_rating(&self) -> &'static str {
        match self {
            TieType::SnapTie => "3k",
            TieType::SheBolt => "5k",
            TieType::TaperTie => "7.5k",
        }
    }

    /// Capacity in pounds before the safety factor.
    ///
    /// These values are already adjusted from the nominal rating.
    pub fn capacity(&self) -> Pounds {
        match self {
            TieType::SnapTie => Pounds(4500.0),
            TieType::SheBolt => Pounds(9000.0),
            TieType::TaperTie => Pounds(15000.0),
        }
    }

    /// Selection label, e.g. "Snap-Tie (3k)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.nominal_rating())
    }

    /// Parse from common string representations
    ///
    /// Accepts canonical names, labels with the rating suffix, and loose
    /// spellings such as `snap_tie` or `SHEBOLT`.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let base = s.split('(').next().unwrap_or(s);
        match base.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "SNAPTIE" | "SNAP" => Ok(TieType::SnapTie),
            "SHEBOLT" => Ok(TieType::SheBolt),
            "TAPERTIE" | "TAPER" => Ok(TieType::TaperTie),
            _ => Err(CalcError::unknown_tie_type(s)),
        }
    }
}

impl fmt::Display for TieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One catalog row: a tie name and its capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieEntry {
    /// Tie name used for lookup
    pub name: String,
    /// Capacity before safety factor (lb)
    pub capacity_lb: f64,
}

/// Mapping from tie name to capacity.
///
/// The standard catalog holds exactly the three [`TieType`] rows. Extra
/// hardware can be added with [`TieCatalog::with_entry`] and used by name.
///
/// ```rust
/// use formwork_core::hardware::TieCatalog;
///
/// let catalog = TieCatalog::standard().clone().with_entry("Coil-Tie", 12000.0).unwrap();
/// assert_eq!(catalog.capacity("Coil-Tie").unwrap().0, 12000.0);
/// assert_eq!(catalog.capacity("Snap-Tie (3k)").unwrap().0, 4500.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieCatalog {
    entries: Vec<TieEntry>,
}

static STANDARD_CATALOG: Lazy<TieCatalog> = Lazy::new(|| TieCatalog {
    entries: TieType::ALL
        .iter()
        .map(|tie| TieEntry {
            name: tie.name().to_string(),
            capacity_lb: tie.capacity().0,
        })
        .collect(),
});

impl TieCatalog {
    /// The process-wide standard catalog
    pub fn standard() -> &'static TieCatalog {
        &STANDARD_CATALOG
    }

    /// Add or replace an entry. Capacity must be positive.
    pub fn with_entry(mut self, name: impl Into<String>, capacity_lb: f64) -> CalcResult<Self> {
        let name = name.into();
        require_positive("capacity_lb", capacity_lb, "Tie capacity must be positive")?;
        match self.entries.iter_mut().find(|e| e.name.eq_ignore_ascii_case(&name)) {
            Some(entry) => entry.capacity_lb = capacity_lb,
            None => self.entries.push(TieEntry { name, capacity_lb }),
        }
        Ok(self)
    }

    /// Catalog rows in insertion order
    pub fn entries(&self) -> &[TieEntry] {
        &self.entries
    }

    /// Find the entry for a tie name.
    ///
    /// An entry whose name matches case-insensitively wins. Otherwise
    /// standard tie spellings such as `"snap_tie"` or `"Snap-Tie (3k)"`
    /// resolve to their canonical row.
    pub fn lookup(&self, tie_type: &str) -> CalcResult<&TieEntry> {
        let name = tie_type.trim();
        if let Some(entry) = self.find(name) {
            return Ok(entry);
        }
        TieType::from_str_flexible(name)
            .ok()
            .and_then(|tie| self.find(tie.name()))
            .ok_or_else(|| CalcError::unknown_tie_type(tie_type))
    }

    fn find(&self, name: &str) -> Option<&TieEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Capacity before safety factor for a tie name
    pub fn capacity(&self, tie_type: &str) -> CalcResult<Pounds> {
        self.lookup(tie_type).map(|e| Pounds(e.capacity_lb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_capacities() {
        let catalog = TieCatalog::standard();
        assert_eq!(catalog.entries().len(), 3);
        assert_eq!(catalog.capacity("Snap-Tie").unwrap().0, 4500.0);
        assert_eq!(catalog.capacity("She-Bolt").unwrap().0, 9000.0);
        assert_eq!(catalog.capacity("Taper-Tie").unwrap().0, 15000.0);
    }

    #[test]
    fn test_lookup_accepts_labels() {
        let catalog = TieCatalog::standard();
        for tie in TieType::ALL {
            assert_eq!(catalog.capacity(&tie.label()).unwrap(), tie.capacity());
        }
        assert_eq!(catalog.capacity("taper_tie").unwrap().0, 15000.0);
    }

    #[test]
    fn test_unknown_tie() {
        let err = TieCatalog::standard().capacity("Wire-Tie").unwrap_err();
        assert_eq!(err, CalcError::unknown_tie_type("Wire-Tie"));
    }

    #[test]
    fn test_with_entry() {
        let catalog = TieCatalog::standard()
            .clone()
            .with_entry("Coil-Tie", 12000.0)
            .unwrap()
            .with_entry("snap-tie", 5000.0)
            .unwrap();
        assert_eq!(catalog.entries().len(), 4);
        assert_eq!(catalog.capacity("Coil-Tie").unwrap().0, 12000.0);
        assert_eq!(catalog.capacity("Snap-Tie").unwrap().0, 5000.0);
        // standard catalog is untouched
        assert_eq!(TieCatalog::standard().capacity("Snap-Tie").unwrap().0, 4500.0);
    }

    #[test]
    fn test_custom_entry_named_after_standard_tie() {
        let catalog = TieCatalog::standard().clone().with_entry("Taper-Tie (HD)", 30000.0).unwrap();
        assert_eq!(catalog.lookup("Taper-Tie (HD)").unwrap().name, "Taper-Tie (HD)");
        assert_eq!(catalog.capacity("taper-tie (hd)").unwrap().0, 30000.0);
        assert_eq!(catalog.capacity("Taper-Tie").unwrap().0, 15000.0);
        assert_eq!(catalog.capacity("Taper-Tie (7.5k)").unwrap().0, 15000.0);
    }

    #[test]
    fn test_with_entry_rejects_zero_capacity() {
        assert!(TieCatalog::standard().clone().with_entry("Bad", 0.0).is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&TieType::SheBolt).unwrap(), "\"She-Bolt\"");
        let tie: TieType = serde_json::from_str("\"Taper-Tie\"").unwrap();
        assert_eq!(tie, TieType::TaperTie);
    }
}
