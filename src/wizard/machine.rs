use crate::error::{Error, Result};
use crate::models::{LandUnit, PriceType, Property};
use crate::wizard::form::{FormField, ListingDraft};
use crate::wizard::validation::{validate_all, validate_step, FieldErrors};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pages of the add-property wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    PropertyDetails,
    Features,
    Photos,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::PropertyDetails,
        WizardStep::Features,
        WizardStep::Photos,
    ];

    /// 1-based position shown in the progress bar
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::PropertyDetails => "Property Details",
            WizardStep::Features => "Features",
            WizardStep::Photos => "Photos",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        self.number().checked_sub(2).map(|i| Self::ALL[i])
    }
}

/// Where the wizard is
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    Editing(WizardStep),
    Submitted(Property),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient message shown to the user, like a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

/// Shows transient notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notifications to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!("✅ {}: {}", notice.title, notice.description),
            NoticeLevel::Error => warn!("{}: {}", notice.title, notice.description),
        }
    }
}

/// Receives finished listings
#[async_trait]
pub trait ListingSink: Send + Sync {
    async fn submit(&self, listing: Property) -> anyhow::Result<Property>;
}

/// Accepts every listing without storing it anywhere
#[derive(Debug, Default)]
pub struct AcceptAllSink;

#[async_trait]
impl ListingSink for AcceptAllSink {
    async fn submit(&self, listing: Property) -> anyhow::Result<Property> {
        debug!("Accepted listing {}", listing.id);
        Ok(listing)
    }
}

/// Result of a submit attempt that reached validation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Field errors were recorded, nothing was sent
    Invalid,
    /// The sink rejected the listing; draft and step are kept for a retry
    Failed(String),
    Submitted(Property),
}

/// Four-step add-property form: Basic Info, Property Details,
/// Features, Photos, then submitted.
///
/// Moving forward requires the current step to validate; errors are kept
/// per field and cleared as soon as that field is edited.
pub struct ListingWizard {
    draft: ListingDraft,
    state: WizardState,
    errors: FieldErrors,
    submit_delay: Duration,
}

impl ListingWizard {
    pub fn new(submit_delay: Duration) -> Self {
        Self::with_draft(ListingDraft::default(), submit_delay)
    }

    pub fn with_draft(draft: ListingDraft, submit_delay: Duration) -> Self {
        Self {
            draft,
            state: WizardState::Editing(WizardStep::BasicInfo),
            errors: FieldErrors::new(),
            submit_delay,
        }
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Current step, `None` once submitted
    pub fn step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Editing(step) => Some(step),
            WizardState::Submitted(_) => None,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Progress bar fill, 0 on the first step and 100 on the last
    pub fn progress_percent(&self) -> f32 {
        match self.state {
            WizardState::Editing(step) => (step.number() - 1) as f32 / 3.0 * 100.0,
            WizardState::Submitted(_) => 100.0,
        }
    }

    /// Edit a text input and drop any error recorded for it
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        if self.draft.set_text(field, value) {
            self.errors.remove(&field);
        }
    }

    pub fn set_price_type(&mut self, price_type: PriceType) {
        self.draft.price_type = price_type;
    }

    pub fn set_land_unit(&mut self, unit: LandUnit) {
        self.draft.land_unit = unit;
    }

    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.draft.categories, id);
    }

    pub fn toggle_amenity(&mut self, id: &str) {
        toggle(&mut self.draft.amenities, id);
    }

    pub fn add_image(&mut self, image: impl Into<String>) {
        self.draft.images.push(image.into());
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.draft.images.len()).then(|| self.draft.images.remove(index))
    }

    /// Validate the current step and move forward if it passes.
    /// Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        let WizardState::Editing(step) = self.state else {
            return false;
        };

        self.errors = validate_step(&self.draft, step);
        if !self.errors.is_empty() {
            debug!("Step {} blocked by {} field errors", step.title(), self.errors.len());
            return false;
        }

        match step.next() {
            Some(next) => {
                self.state = WizardState::Editing(next);
                true
            }
            None => false,
        }
    }

    /// Go back one step. Always allowed; stays put on the first step.
    pub fn previous(&mut self) {
        if let WizardState::Editing(step) = self.state {
            if let Some(prev) = step.previous() {
                self.state = WizardState::Editing(prev);
            }
        }
    }

    /// Send the listing from the photos step.
    ///
    /// Errors only for misuse: submitting from an earlier step or twice.
    /// Validation and sink failures are reported through the outcome.
    pub async fn submit(&mut self, sink: &dyn ListingSink, notifier: &dyn Notifier) -> Result<SubmitOutcome> {
        match self.state {
            WizardState::Submitted(_) => return Err(Error::AlreadySubmitted),
            WizardState::Editing(WizardStep::Photos) => {}
            WizardState::Editing(_) => return Err(Error::NotOnFinalStep),
        }

        self.errors = validate_step(&self.draft, WizardStep::Photos);
        if !self.errors.is_empty() {
            return Ok(SubmitOutcome::Invalid);
        }

        // Earlier steps may have been edited after they were passed
        let all_errors = validate_all(&self.draft);
        let listing = match self.draft.to_property(format!("listing-{}", Utc::now().timestamp_millis())) {
            Some(listing) if all_errors.is_empty() => listing,
            _ => {
                self.errors = all_errors;
                return Ok(SubmitOutcome::Invalid);
            }
        };

        tokio::time::sleep(self.submit_delay).await;

        match sink.submit(listing).await {
            Ok(created) => {
                info!("Listing {} submitted", created.id);
                notifier.notify(Notice {
                    level: NoticeLevel::Success,
                    title: "Property submitted".to_string(),
                    description: "Your property has been submitted for review.".to_string(),
                });
                self.state = WizardState::Submitted(created.clone());
                Ok(SubmitOutcome::Submitted(created))
            }
            Err(e) => {
                warn!("Listing submission failed: {:#}", e);
                notifier.notify(Notice {
                    level: NoticeLevel::Error,
                    title: "Submission failed".to_string(),
                    description: e.to_string(),
                });
                Ok(SubmitOutcome::Failed(e.to_string()))
            }
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Notice>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.0.lock().unwrap().push(notice);
        }
    }

    struct RejectingSink;

    #[async_trait]
    impl ListingSink for RejectingSink {
        async fn submit(&self, _listing: Property) -> anyhow::Result<Property> {
            anyhow::bail!("service unavailable")
        }
    }

    fn filled_wizard() -> ListingWizard {
        let mut wizard = ListingWizard::new(Duration::from_secs(2));
        wizard.set_field(FormField::Title, "Modern 2 Bedroom Apartment");
        wizard.set_field(FormField::Description, "Bright apartment with backup power");
        wizard.set_field(FormField::Location, "Lekki Phase 1, Lagos");
        wizard.set_field(FormField::Price, "120000");
        assert!(wizard.next());

        wizard.set_field(FormField::PropertyType, "apartment");
        wizard.set_field(FormField::Beds, "2");
        wizard.set_field(FormField::Baths, "2");
        wizard.set_field(FormField::MaxGuests, "4");
        assert!(wizard.next());

        wizard.toggle_category("apartments");
        wizard.toggle_amenity("wifi");
        assert!(wizard.next());

        wizard.add_image("living-room.jpg");
        wizard
    }

    #[test]
    fn test_step_order() {
        assert_eq!(WizardStep::BasicInfo.previous(), None);
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::PropertyDetails));
        assert_eq!(WizardStep::Photos.next(), None);
        assert_eq!(WizardStep::Photos.previous(), Some(WizardStep::Features));
    }

    #[test]
    fn test_next_blocked_records_errors_and_edit_clears_them() {
        let mut wizard = ListingWizard::new(Duration::ZERO);
        assert!(!wizard.next());
        assert_eq!(wizard.step(), Some(WizardStep::BasicInfo));
        assert_eq!(wizard.error(FormField::Title), Some("Title is required"));

        wizard.set_field(FormField::Title, "Villa");
        assert_eq!(wizard.error(FormField::Title), None);
        assert!(wizard.error(FormField::Price).is_some());
    }

    #[test]
    fn test_details_step_branches_on_landed_type() {
        let mut wizard = ListingWizard::new(Duration::ZERO);
        wizard.set_field(FormField::Title, "Land");
        wizard.set_field(FormField::Description, "Dry land");
        wizard.set_field(FormField::Location, "Epe");
        wizard.set_field(FormField::Price, "500000");
        assert!(wizard.next());

        wizard.set_field(FormField::PropertyType, "villa");
        assert!(!wizard.next());
        assert!(wizard.error(FormField::Beds).is_some());

        wizard.set_field(FormField::PropertyType, "land");
        wizard.set_field(FormField::LandSize, "0");
        assert!(!wizard.next());
        assert!(wizard.error(FormField::LandSize).is_some());
        assert!(wizard.error(FormField::Beds).is_none());

        wizard.set_field(FormField::LandSize, "450");
        assert!(wizard.next());
        assert_eq!(wizard.step(), Some(WizardStep::Features));
    }

    #[test]
    fn test_previous_always_allowed() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.progress_percent(), 100.0);
        wizard.previous();
        wizard.previous();
        wizard.previous();
        wizard.previous();
        assert_eq!(wizard.step(), Some(WizardStep::BasicInfo));
        assert_eq!(wizard.progress_percent(), 0.0);
    }

    #[tokio::test]
    async fn test_submit_only_from_photos() {
        let mut wizard = ListingWizard::new(Duration::ZERO);
        let result = wizard.submit(&AcceptAllSink, &LogNotifier).await;
        assert!(matches!(result, Err(Error::NotOnFinalStep)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_success_after_delay() {
        let mut wizard = filled_wizard();
        let notices = Recorder::default();
        let started = tokio::time::Instant::now();

        let outcome = wizard.submit(&AcceptAllSink, &notices).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));

        let listing = match outcome {
            SubmitOutcome::Submitted(listing) => listing,
            other => panic!("expected submission, got {other:?}"),
        };
        assert_eq!(listing.beds(), Some(2));
        assert_eq!(listing.price, 120_000);
        assert!(matches!(wizard.state(), WizardState::Submitted(_)));
        assert_eq!(notices.0.lock().unwrap()[0].level, NoticeLevel::Success);

        let again = wizard.submit(&AcceptAllSink, &notices).await;
        assert!(matches!(again, Err(Error::AlreadySubmitted)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_without_images_is_invalid() {
        let mut wizard = filled_wizard();
        wizard.remove_image(0);
        let outcome = wizard.submit(&AcceptAllSink, &LogNotifier).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(wizard.error(FormField::Images).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submission_keeps_draft() {
        let mut wizard = filled_wizard();
        let draft = wizard.draft().clone();
        let notices = Recorder::default();

        let outcome = wizard.submit(&RejectingSink, &notices).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed("service unavailable".to_string()));
        assert_eq!(wizard.step(), Some(WizardStep::Photos));
        assert_eq!(wizard.draft(), &draft);
        assert_eq!(notices.0.lock().unwrap()[0].level, NoticeLevel::Error);

        // Retry goes through once the service is back
        let outcome = wizard.submit(&AcceptAllSink, &notices).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    }
}
