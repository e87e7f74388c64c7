pub mod error;
pub mod listing;
pub mod system;

pub use error::RegistryError;
pub use listing::{Category, Listing};
pub use system::RegistrationSystem;
