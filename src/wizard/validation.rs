use crate::wizard::form::{parse_number, FormField, ListingDraft};
use crate::wizard::machine::WizardStep;
use std::collections::BTreeMap;

/// Messages keyed by the field they belong to
pub type FieldErrors = BTreeMap<FormField, String>;

fn required(errors: &mut FieldErrors, field: FormField, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
        false
    } else {
        true
    }
}

/// Required number that must be above zero
fn positive(errors: &mut FieldErrors, field: FormField, value: &str, missing: &str, invalid: &str) {
    if required(errors, field, value, missing) && !parse_number(value).is_some_and(|n| n > 0.0) {
        errors.insert(field, invalid.to_string());
    }
}

/// Required number that may be zero
fn non_negative(errors: &mut FieldErrors, field: FormField, value: &str, missing: &str, invalid: &str) {
    if required(errors, field, value, missing) && !parse_number(value).is_some_and(|n| n >= 0.0) {
        errors.insert(field, invalid.to_string());
    }
}

/// Check the inputs shown on `step`. An empty map means the step is complete.
pub fn validate_step(draft: &ListingDraft, step: WizardStep) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        WizardStep::BasicInfo => {
            required(&mut errors, FormField::Title, &draft.title, "Title is required");
            required(&mut errors, FormField::Description, &draft.description, "Description is required");
            required(&mut errors, FormField::Location, &draft.location, "Location is required");
            positive(
                &mut errors,
                FormField::Price,
                &draft.price,
                "Price is required",
                "Price must be a positive number",
            );
        }
        WizardStep::PropertyDetails => {
            if required(&mut errors, FormField::PropertyType, &draft.property_type, "Property type is required")
                && draft.property_type().is_none()
            {
                errors.insert(FormField::PropertyType, "Please select a valid property type".to_string());
            }

            if draft.is_landed() {
                positive(
                    &mut errors,
                    FormField::LandSize,
                    &draft.land_size,
                    "Land size is required",
                    "Land size must be a positive number",
                );
            } else {
                non_negative(
                    &mut errors,
                    FormField::Beds,
                    &draft.beds,
                    "Number of beds is required",
                    "Beds must be a non-negative number",
                );
                non_negative(
                    &mut errors,
                    FormField::Baths,
                    &draft.baths,
                    "Number of baths is required",
                    "Baths must be a non-negative number",
                );
                positive(
                    &mut errors,
                    FormField::MaxGuests,
                    &draft.max_guests,
                    "Maximum guests is required",
                    "Maximum guests must be a positive number",
                );
            }
        }
        WizardStep::Features => {
            if draft.categories.is_empty() {
                errors.insert(FormField::Categories, "Select at least one category".to_string());
            }
            if draft.amenities.is_empty() {
                errors.insert(FormField::Amenities, "Select at least one amenity".to_string());
            }
        }
        WizardStep::Photos => {
            if draft.images.is_empty() {
                errors.insert(FormField::Images, "Upload at least one image".to_string());
            }
        }
    }

    errors
}

/// Validate every step, collecting all errors
pub fn validate_all(draft: &ListingDraft) -> FieldErrors {
    WizardStep::ALL
        .into_iter()
        .flat_map(|step| validate_step(draft, step))
        .collect()
}
