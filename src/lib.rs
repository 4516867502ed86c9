//! Property marketplace core: listings, search and filtering, recent
//! search history, and the add-property wizard.

pub mod config;
pub mod data;
pub mod error;
pub mod listing;
pub mod models;
pub mod search;
pub mod wizard;

pub use error::{Error, Result};
