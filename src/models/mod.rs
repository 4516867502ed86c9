use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Penthouse,
    Studio,
    Shortlet,
    Cabin,
    Farmhouse,
    Commercial,
    Land,
    Plot,
    Farm,
}

impl PropertyType {
    pub const ALL: [PropertyType; 12] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Penthouse,
        PropertyType::Studio,
        PropertyType::Shortlet,
        PropertyType::Cabin,
        PropertyType::Farmhouse,
        PropertyType::Commercial,
        PropertyType::Land,
        PropertyType::Plot,
        PropertyType::Farm,
    ];

    /// Landed types describe their size as land area instead of rooms.
    pub fn is_landed(self) -> bool {
        matches!(self, PropertyType::Land | PropertyType::Plot | PropertyType::Farm)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Studio => "studio",
            PropertyType::Shortlet => "shortlet",
            PropertyType::Cabin => "cabin",
            PropertyType::Farmhouse => "farmhouse",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
            PropertyType::Plot => "plot",
            PropertyType::Farm => "farm",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| Error::UnknownPropertyType(s.to_string()))
    }
}

/// How the listed price is charged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PriceType {
    PerNight,
    #[default]
    Monthly,
    Yearly,
    Sale,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LandUnit {
    #[default]
    Sqm,
    Acres,
    Hectares,
    Plots,
}

/// Physical size of a property: rooms for buildings, area for landed types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Dimensions {
    #[serde(rename_all = "camelCase")]
    Rooms {
        beds: u32,
        baths: u32,
        max_guests: u32,
    },
    #[serde(rename_all = "camelCase")]
    Land { land_size: f64, land_unit: LandUnit },
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: u64,
    #[serde(default)]
    pub price_type: PriceType,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_superhost: bool,
    #[serde(default)]
    pub is_guest_favorite: bool,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Property {
    pub fn beds(&self) -> Option<u32> {
        match self.dimensions {
            Dimensions::Rooms { beds, .. } => Some(beds),
            Dimensions::Land { .. } => None,
        }
    }

    pub fn baths(&self) -> Option<u32> {
        match self.dimensions {
            Dimensions::Rooms { baths, .. } => Some(baths),
            Dimensions::Land { .. } => None,
        }
    }

    pub fn max_guests(&self) -> Option<u32> {
        match self.dimensions {
            Dimensions::Rooms { max_guests, .. } => Some(max_guests),
            Dimensions::Land { .. } => None,
        }
    }

    /// Whether the dimensions agree with the landed/non-landed type split
    pub fn is_consistent(&self) -> bool {
        let landed = matches!(self.dimensions, Dimensions::Land { .. });
        landed == self.property_type.is_landed()
    }
}

/// Browsing category shown above the listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub featured: bool,
}

impl Category {
    pub fn new(id: &str, label: &str, featured: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            featured,
        }
    }
}

/// Split categories into (featured, regular), keeping their order
pub fn partition_categories(categories: &[Category]) -> (Vec<&Category>, Vec<&Category>) {
    categories.iter().partition(|c| c.featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_landed_types() {
        let landed: Vec<_> = PropertyType::ALL.into_iter().filter(|t| t.is_landed()).collect();
        assert_eq!(landed, vec![PropertyType::Land, PropertyType::Plot, PropertyType::Farm]);
        assert!(!PropertyType::Farmhouse.is_landed());
    }

    #[test]
    fn test_property_type_from_str() {
        assert_eq!("Villa".parse::<PropertyType>().unwrap(), PropertyType::Villa);
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_deserialize_rooms_and_land() {
        let flat: Property = serde_json::from_value(json!({
            "id": "1",
            "title": "Cozy flat",
            "location": "Yaba, Lagos",
            "type": "apartment",
            "price": 45000,
            "priceType": "perNight",
            "beds": 2,
            "baths": 1,
            "maxGuests": 3
        }))
        .unwrap();
        assert_eq!(flat.beds(), Some(2));
        assert_eq!(flat.max_guests(), Some(3));
        assert!(flat.available);
        assert!(flat.is_consistent());

        let plot: Property = serde_json::from_value(json!({
            "id": "2",
            "title": "Dry plot",
            "location": "Epe, Lagos",
            "type": "plot",
            "price": 900000,
            "priceType": "sale",
            "landSize": 600.0,
            "landUnit": "sqm"
        }))
        .unwrap();
        assert_eq!(plot.beds(), None);
        assert!(plot.is_consistent());
    }

    #[test]
    fn test_partition_categories() {
        let cats = vec![
            Category::new("luxury", "Luxury Homes", true),
            Category::new("land", "Land", false),
            Category::new("beachfront", "Beachfront", true),
        ];
        let (featured, regular) = partition_categories(&cats);
        assert_eq!(featured.len(), 2);
        assert_eq!(regular[0].id, "land");
    }
}
