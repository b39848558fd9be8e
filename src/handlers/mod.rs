// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod accounts;
mod health;
mod metrics;
mod products;
mod root;
mod shared_types;

// Core handlers
pub use health::health_check;
pub use self::metrics::{metrics_handler, track_requests};
pub use root::root_handler;

// Account handlers
pub use accounts::{current_session, login, logout, profile, register};

// Product handlers
pub use products::{create_product, get_product, list_products, my_products};
