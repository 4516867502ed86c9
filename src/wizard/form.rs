use crate::models::{Dimensions, LandUnit, PriceType, Property, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inputs of the add-property form, used as keys of the error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    Description,
    Location,
    Price,
    PriceType,
    #[serde(rename = "type")]
    PropertyType,
    Beds,
    Baths,
    MaxGuests,
    LandSize,
    LandUnit,
    AvailableFrom,
    AvailableTo,
    Categories,
    Amenities,
    Images,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Location => "location",
            FormField::Price => "price",
            FormField::PriceType => "priceType",
            FormField::PropertyType => "type",
            FormField::Beds => "beds",
            FormField::Baths => "baths",
            FormField::MaxGuests => "maxGuests",
            FormField::LandSize => "landSize",
            FormField::LandUnit => "landUnit",
            FormField::AvailableFrom => "availableFrom",
            FormField::AvailableTo => "availableTo",
            FormField::Categories => "categories",
            FormField::Amenities => "amenities",
            FormField::Images => "images",
        };
        f.write_str(name)
    }
}

/// Property draft as typed into the form. Numeric inputs stay as text
/// until validation so bad input can be reported against its field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub price_type: PriceType,
    pub beds: String,
    pub baths: String,
    pub max_guests: String,
    pub available_from: String,
    pub available_to: String,
    pub categories: BTreeSet<String>,
    pub amenities: BTreeSet<String>,
    pub land_size: String,
    pub land_unit: LandUnit,
    /// Uploaded image references, in display order
    pub images: Vec<String>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            price: String::new(),
            property_type: String::new(),
            price_type: PriceType::Monthly,
            beds: String::new(),
            baths: String::new(),
            max_guests: String::new(),
            available_from: String::new(),
            available_to: String::new(),
            categories: BTreeSet::new(),
            amenities: BTreeSet::new(),
            land_size: String::new(),
            land_unit: LandUnit::Sqm,
            images: Vec::new(),
        }
    }
}

/// Parse a numeric form input the way a number field reads it:
/// surrounding whitespace ignored, must be finite.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

impl ListingDraft {
    /// Selected property type, if one valid type is chosen
    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type.parse().ok()
    }

    pub fn is_landed(&self) -> bool {
        self.property_type().is_some_and(PropertyType::is_landed)
    }

    /// Text value of a field; `None` for the list fields
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Location => &self.location,
            FormField::Price => &self.price,
            FormField::PropertyType => &self.property_type,
            FormField::Beds => &self.beds,
            FormField::Baths => &self.baths,
            FormField::MaxGuests => &self.max_guests,
            FormField::LandSize => &self.land_size,
            FormField::AvailableFrom => &self.available_from,
            FormField::AvailableTo => &self.available_to,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Set a text field. Returns false for fields that aren't free text.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Location => &mut self.location,
            FormField::Price => &mut self.price,
            FormField::PropertyType => &mut self.property_type,
            FormField::Beds => &mut self.beds,
            FormField::Baths => &mut self.baths,
            FormField::MaxGuests => &mut self.max_guests,
            FormField::LandSize => &mut self.land_size,
            FormField::AvailableFrom => &mut self.available_from,
            FormField::AvailableTo => &mut self.available_to,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Build the property this draft describes. Expects a draft that
    /// passed validation; returns `None` when a required value is unusable.
    pub fn to_property(&self, id: impl Into<String>) -> Option<Property> {
        let property_type = self.property_type()?;
        let price = parse_number(&self.price)?;

        let dimensions = if property_type.is_landed() {
            Dimensions::Land {
                land_size: parse_number(&self.land_size)?,
                land_unit: self.land_unit,
            }
        } else {
            Dimensions::Rooms {
                beds: parse_number(&self.beds)? as u32,
                baths: parse_number(&self.baths)? as u32,
                max_guests: parse_number(&self.max_guests)? as u32,
            }
        };

        Some(Property {
            id: id.into(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            property_type,
            price: price.round() as u64,
            price_type: self.price_type,
            dimensions,
            images: self.images.clone(),
            categories: self.categories.clone(),
            amenities: self.amenities.clone(),
            rating: 0.0,
            review_count: 0,
            featured: false,
            is_superhost: false,
            is_guest_favorite: false,
            available: true,
        })
    }
}
