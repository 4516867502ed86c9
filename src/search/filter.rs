use crate::models::Property;
use crate::search::types::{FilterSelection, SearchQuery};
use chrono::{DateTime, NaiveDate};
use tracing::debug;

/// Parse a date typed or picked in the search bar.
/// Accepts plain `YYYY-MM-DD` as well as full RFC 3339 timestamps.
pub fn parse_search_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Reduce the full property list to what matches the query.
///
/// Predicates run in a fixed order and all must hold:
/// location text, date availability, guest capacity, category,
/// price range, property type, amenities, then bed and bath thresholds.
pub fn filter_properties<'a>(properties: &'a [Property], query: &SearchQuery) -> Vec<&'a Property> {
    let params = &query.params;
    let selection = &query.selection;
    let mut result: Vec<&Property> = properties.iter().collect();

    if !params.location.is_empty() {
        let term = params.location.to_lowercase();
        result.retain(|p| {
            p.title.to_lowercase().contains(&term) || p.location.to_lowercase().contains(&term)
        });
    }

    if !params.check_in.is_empty() && !params.check_out.is_empty() {
        match (parse_search_date(&params.check_in), parse_search_date(&params.check_out)) {
            // No booking calendar yet, only the availability flag is checked
            (Some(_), Some(_)) => result.retain(|p| p.available),
            _ => debug!(
                "Ignoring date filter for unparseable dates {:?} - {:?}",
                params.check_in, params.check_out
            ),
        }
    }

    if params.guests > 0 {
        result.retain(|p| p.max_guests().is_some_and(|max| max >= params.guests));
    }

    result.retain(|p| query.category.matches(&p.categories));

    result.retain(|p| selection.price_range.contains(p.price));

    if !selection.property_types.is_empty() {
        result.retain(|p| selection.property_types.contains(&p.property_type));
    }

    if !selection.amenities.is_empty() {
        result.retain(|p| selection.amenities.is_subset(&p.amenities));
    }

    if let Some(beds) = selection.beds {
        result.retain(|p| p.beds().is_some_and(|n| beds.is_met_by(n)));
    }

    if let Some(baths) = selection.baths {
        result.retain(|p| p.baths().is_some_and(|n| baths.is_met_by(n)));
    }

    result
}

/// Number of filter-panel dimensions moved away from their defaults
pub fn active_filter_count(selection: &FilterSelection) -> usize {
    [
        selection.price_range.is_narrowed(),
        !selection.property_types.is_empty(),
        !selection.amenities.is_empty(),
        selection.beds.is_some(),
        selection.baths.is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}
