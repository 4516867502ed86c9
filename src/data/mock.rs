use crate::data::traits::PropertyProvider;
use crate::models::{Category, Dimensions, LandUnit, PriceType, Property, PropertyType};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::info;

/// Built-in demo listings around Lagos and Abuja
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PropertyProvider for MockProvider {
    async fn properties(&self) -> Result<Vec<Property>> {
        let properties = mock_properties();
        info!("📋 Loaded {} mock properties", properties.len());
        Ok(properties)
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(mock_categories())
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

fn tags(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_categories() -> Vec<Category> {
    vec![
        Category::new("apartments", "Apartments", true),
        Category::new("shortlets", "Shortlet Apartments", true),
        Category::new("beachfront", "Beachfront", true),
        Category::new("luxury", "Luxury Homes", true),
        Category::new("vacation", "Vacation Homes", false),
        Category::new("mountain", "Mountain View", false),
        Category::new("countryside", "Countryside", false),
        Category::new("commercial", "Commercial", false),
        Category::new("land", "Land", false),
        Category::new("plots", "Plots", false),
        Category::new("farms", "Farms", false),
    ]
}

pub fn mock_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern 2 Bedroom Apartment".to_string(),
            description: "Bright apartment close to the Admiralty Way shops, with backup power and 24h security.".to_string(),
            location: "Lekki Phase 1, Lagos".to_string(),
            property_type: PropertyType::Apartment,
            price: 120_000,
            price_type: PriceType::PerNight,
            dimensions: Dimensions::Rooms { beds: 2, baths: 2, max_guests: 4 },
            images: vec!["/images/lekki-apartment-1.jpg".to_string()],
            categories: tags(&["apartments", "shortlets"]),
            amenities: tags(&["wifi", "kitchen", "aircon", "security", "parking"]),
            rating: 4.8,
            review_count: 124,
            featured: true,
            is_superhost: true,
            is_guest_favorite: false,
            available: true,
        },
        Property {
            id: "2".to_string(),
            title: "Oceanfront Villa with Pool".to_string(),
            description: "Five bedroom villa on the beach with a private pool and staff quarters.".to_string(),
            location: "Eleko Beach, Lagos".to_string(),
            property_type: PropertyType::Villa,
            price: 450_000,
            price_type: PriceType::PerNight,
            dimensions: Dimensions::Rooms { beds: 5, baths: 6, max_guests: 10 },
            images: vec!["/images/eleko-villa-1.jpg".to_string(), "/images/eleko-villa-2.jpg".to_string()],
            categories: tags(&["beachfront", "luxury", "vacation"]),
            amenities: tags(&["wifi", "pool", "beach", "kitchen", "aircon", "bbq"]),
            rating: 4.9,
            review_count: 86,
            featured: true,
            is_superhost: false,
            is_guest_favorite: true,
            available: true,
        },
        Property {
            id: "3".to_string(),
            title: "Serviced Studio in Wuse".to_string(),
            description: "Compact studio with workspace, ideal for business travellers.".to_string(),
            location: "Wuse 2, Abuja".to_string(),
            property_type: PropertyType::Studio,
            price: 350_000,
            price_type: PriceType::Monthly,
            dimensions: Dimensions::Rooms { beds: 1, baths: 1, max_guests: 2 },
            images: vec!["/images/wuse-studio-1.jpg".to_string()],
            categories: tags(&["apartments"]),
            amenities: tags(&["wifi", "workspace", "aircon", "tv"]),
            rating: 4.5,
            review_count: 42,
            featured: false,
            is_superhost: false,
            is_guest_favorite: false,
            available: true,
        },
        Property {
            id: "4".to_string(),
            title: "Penthouse Overlooking the Lagoon".to_string(),
            description: "Top-floor penthouse with wraparound balcony and gym access.".to_string(),
            location: "Ikoyi, Lagos".to_string(),
            property_type: PropertyType::Penthouse,
            price: 900_000,
            price_type: PriceType::Monthly,
            dimensions: Dimensions::Rooms { beds: 4, baths: 4, max_guests: 8 },
            images: vec!["/images/ikoyi-penthouse-1.jpg".to_string()],
            categories: tags(&["luxury", "apartments"]),
            amenities: tags(&["wifi", "gym", "balcony", "pool", "security", "parking"]),
            rating: 4.7,
            review_count: 19,
            featured: true,
            is_superhost: true,
            is_guest_favorite: false,
            available: false,
        },
        Property {
            id: "5".to_string(),
            title: "Hillside Cabin Retreat".to_string(),
            description: "Quiet cabin on the Obudu plateau with a garden and fire pit.".to_string(),
            location: "Obudu, Cross River".to_string(),
            property_type: PropertyType::Cabin,
            price: 75_000,
            price_type: PriceType::PerNight,
            dimensions: Dimensions::Rooms { beds: 2, baths: 1, max_guests: 4 },
            images: vec!["/images/obudu-cabin-1.jpg".to_string()],
            categories: tags(&["mountain", "vacation", "countryside"]),
            amenities: tags(&["kitchen", "garden", "parking"]),
            rating: 4.6,
            review_count: 57,
            featured: false,
            is_superhost: false,
            is_guest_favorite: true,
            available: true,
        },
        Property {
            id: "6".to_string(),
            title: "Family House in Gwarinpa".to_string(),
            description: "Detached duplex in a gated estate with a large compound.".to_string(),
            location: "Gwarinpa, Abuja".to_string(),
            property_type: PropertyType::House,
            price: 6_500_000,
            price_type: PriceType::Yearly,
            dimensions: Dimensions::Rooms { beds: 5, baths: 5, max_guests: 10 },
            images: vec!["/images/gwarinpa-house-1.jpg".to_string()],
            categories: tags(&["luxury"]),
            amenities: tags(&["parking", "security", "garden", "washer"]),
            rating: 4.4,
            review_count: 11,
            featured: false,
            is_superhost: false,
            is_guest_favorite: false,
            available: true,
        },
        Property {
            id: "7".to_string(),
            title: "Dry Land in Ibeju-Lekki".to_string(),
            description: "Fenced plot with C of O, a short drive from the Lekki free trade zone.".to_string(),
            location: "Ibeju-Lekki, Lagos".to_string(),
            property_type: PropertyType::Plot,
            price: 950_000,
            price_type: PriceType::Sale,
            dimensions: Dimensions::Land { land_size: 600.0, land_unit: LandUnit::Sqm },
            images: vec!["/images/ibeju-plot-1.jpg".to_string()],
            categories: tags(&["land", "plots"]),
            amenities: tags(&["roadAccess", "fenced", "cOfO"]),
            rating: 0.0,
            review_count: 0,
            featured: false,
            is_superhost: false,
            is_guest_favorite: false,
            available: true,
        },
        Property {
            id: "8".to_string(),
            title: "Cassava Farm Estate".to_string(),
            description: "Working farm with borehole and access road.".to_string(),
            location: "Ogun State".to_string(),
            property_type: PropertyType::Farm,
            price: 25_000_000,
            price_type: PriceType::Sale,
            dimensions: Dimensions::Land { land_size: 5.0, land_unit: LandUnit::Hectares },
            images: vec!["/images/ogun-farm-1.jpg".to_string()],
            categories: tags(&["farms", "countryside"]),
            amenities: tags(&["roadAccess", "waterSupply", "electricity"]),
            rating: 0.0,
            review_count: 0,
            featured: false,
            is_superhost: false,
            is_guest_favorite: false,
            available: true,
        },
    ]
}
