use crate::models::{PriceType, Property, PropertyType};
use serde::{Deserialize, Serialize};

/// Which properties a grid starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridSource {
    #[default]
    All,
    FeaturedOnly,
}

/// Responsive column layout of a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnLayout {
    One,
    Two,
    Three,
    #[default]
    Four,
}

impl ColumnLayout {
    /// Columns at the widest breakpoint
    pub fn max_columns(self) -> usize {
        match self {
            ColumnLayout::One => 1,
            ColumnLayout::Two => 2,
            ColumnLayout::Three => 3,
            ColumnLayout::Four => 4,
        }
    }
}

/// How a property grid is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub source: GridSource,
    pub columns: ColumnLayout,
    pub max_items: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            source: GridSource::All,
            columns: ColumnLayout::Four,
            max_items: 12,
        }
    }
}

impl GridConfig {
    pub fn featured() -> Self {
        Self {
            source: GridSource::FeaturedOnly,
            ..Self::default()
        }
    }

    /// Properties this grid shows, in order
    pub fn select<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties
            .iter()
            .filter(|p| match self.source {
                GridSource::All => true,
                GridSource::FeaturedOnly => p.featured,
            })
            .take(self.max_items)
            .collect()
    }
}

/// Unit shown after a price, none for sales
pub fn price_label(price_type: PriceType) -> Option<&'static str> {
    match price_type {
        PriceType::PerNight => Some("night"),
        PriceType::Monthly => Some("month"),
        PriceType::Yearly => Some("year"),
        PriceType::Sale => None,
    }
}

/// Whole naira with thousands separators, e.g. `₦120,000`
pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₦');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Price with its unit, e.g. `₦120,000 / night`
pub fn format_price(property: &Property) -> String {
    match price_label(property.price_type) {
        Some(label) => format!("{} / {}", format_naira(property.price), label),
        None => format_naira(property.price),
    }
}

/// Card heading such as "Apartment in Lekki Phase 1, Lagos"
pub fn card_title(property_type: PropertyType, location: &str) -> String {
    let name = property_type.as_str();
    let mut chars = name.chars();
    let capitalised = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => "Property".to_string(),
    };
    format!("{capitalised} in {location}")
}
