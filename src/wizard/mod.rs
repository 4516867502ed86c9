pub mod form;
pub mod machine;
pub mod validation;

pub use form::{FormField, ListingDraft};
pub use machine::{
    AcceptAllSink, ListingSink, ListingWizard, LogNotifier, Notice, NoticeLevel, Notifier, SubmitOutcome,
    WizardState, WizardStep,
};
pub use validation::{validate_step, FieldErrors};
