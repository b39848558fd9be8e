mod error;
mod metrics;
mod models;
mod store;

// Publicly expose the Metrics abstraction
pub use self::metrics::{Metrics, MetricsPtr};

// Publicly expose the storage seam
pub use store::{CollectionKey, KeyValueStore, StorePtr};

// Records and form inputs
pub use models::{
    placeholder_image, Credentials, NewProduct, NewUser, Product, ProductStatus, User,
    ALL_CATEGORIES, KNOWN_CATEGORIES,
};

// Error taxonomy
pub use error::{MarketError, MarketResult, ValidationError};
