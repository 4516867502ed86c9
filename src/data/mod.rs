pub mod json;
pub mod mock;
pub mod traits;

pub use json::JsonFileProvider;
pub use mock::MockProvider;
pub use traits::PropertyProvider;
