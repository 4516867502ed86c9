pub mod display;
pub mod pagination;
pub mod quote;

pub use display::{format_naira, format_price, GridConfig};
pub use pagination::{page_numbers, PageItem, Paginator};
pub use quote::BookingQuote;
