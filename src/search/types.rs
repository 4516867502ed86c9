use crate::error::Error;
use crate::models::PropertyType;
use crate::search::guests::GuestCounts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Upper bound of the default price range (NGN)
pub const DEFAULT_MAX_PRICE: u64 = 1_000_000;

/// What the user typed into the search bar.
/// Serialized as-is into the search history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free text matched against title and location
    #[serde(default)]
    pub location: String,
    /// Check-in date, ISO formatted
    #[serde(default)]
    pub check_in: String,
    /// Check-out date, ISO formatted
    #[serde(default)]
    pub check_out: String,
    /// Requested guests, 0 means any
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub guest_details: GuestCounts,
    #[serde(default)]
    pub is_flexible_dates: bool,
    #[serde(default)]
    pub flexible_option: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            location: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: 0,
            guest_details: GuestCounts::default(),
            is_flexible_dates: false,
            flexible_option: None,
        }
    }
}

impl SearchParams {
    /// Whether this search is worth remembering in the history
    pub fn is_recordable(&self) -> bool {
        !self.location.is_empty() || !self.check_in.is_empty() || self.guests > 0
    }

    /// Two searches are the same history entry when place and dates match
    pub fn same_search(&self, other: &SearchParams) -> bool {
        self.location == other.location
            && self.check_in == other.check_in
            && self.check_out == other.check_out
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Narrowed away from the default bounds
    pub fn is_narrowed(&self) -> bool {
        self.min > 0 || self.max < DEFAULT_MAX_PRICE
    }
}

/// Minimum bed or bath count picked from "1".."4" or "5+"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoomThreshold(u32);

impl RoomThreshold {
    pub fn at_least(count: u32) -> Self {
        Self(count)
    }

    pub fn min(self) -> u32 {
        self.0
    }

    pub fn is_met_by(self, count: u32) -> bool {
        count >= self.0
    }
}

impl FromStr for RoomThreshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('+').unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(RoomThreshold)
            .map_err(|_| Error::InvalidThreshold(s.to_string()))
    }
}

impl fmt::Display for RoomThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 5 {
            write!(f, "5+")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Filters chosen in the filter panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub price_range: PriceRange,
    pub property_types: BTreeSet<PropertyType>,
    pub amenities: BTreeSet<String>,
    pub beds: Option<RoomThreshold>,
    pub baths: Option<RoomThreshold>,
}

/// Category tab above the listings, "all" by default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, categories: &BTreeSet<String>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => categories.contains(id),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            "" | "all" => CategoryFilter::All,
            id => CategoryFilter::Only(id.to_string()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(id) => f.write_str(id),
        }
    }
}

/// Everything the filter chain looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub params: SearchParams,
    pub category: CategoryFilter,
    pub selection: FilterSelection,
}

impl SearchQuery {
    /// A query that passes every property.
    ///
    /// The default query keeps the price slider's 0..=1,000,000 range, so
    /// listings priced above it only show up once the range is widened.
    pub fn unfiltered() -> Self {
        Self {
            selection: FilterSelection {
                price_range: PriceRange::new(0, u64::MAX),
                ..FilterSelection::default()
            },
            ..Self::default()
        }
    }
}
