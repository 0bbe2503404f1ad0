//! Qualification/relegation zone classification
//!
//! Maps a table position to a zone label using an ordered band table. The
//! bands are league-size-specific (the defaults fit a 20-team table), so
//! they live in a configurable `ZoneTable` rather than hardcoded ranges.

use std::ops::RangeInclusive;

/// Significance of a table position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Continental qualification places
    Continental,
    /// Secondary qualification places
    Secondary,
    /// Mid-table positions
    MidTable,
    /// Relegation places
    Relegation,
    /// No particular significance
    None,
}

/// Ordered list of position bands mapped to zones
///
/// The first band containing a position wins; positions outside every band
/// classify as `Zone::None`.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    bands: Vec<(RangeInclusive<u32>, Zone)>,
}

impl ZoneTable {
    /// Creates a zone table from an explicit band list
    pub fn new(bands: Vec<(RangeInclusive<u32>, Zone)>) -> Self {
        Self { bands }
    }

    /// Classifies a table position
    ///
    /// Pure function of the position and the configured bands.
    pub fn classify(&self, position: u32) -> Zone {
        self.bands
            .iter()
            .find(|(range, _)| range.contains(&position))
            .map(|(_, zone)| *zone)
            .unwrap_or(Zone::None)
    }
}

impl Default for ZoneTable {
    /// Bands for a 20-team league such as the Brazilian Série A
    fn default() -> Self {
        Self::new(vec![
            (1..=4, Zone::Continental),
            (5..=6, Zone::Secondary),
            (7..=12, Zone::MidTable),
            (17..=20, Zone::Relegation),
        ])
    }
}
