pub mod catalog;
pub mod registrations;

pub use catalog::{load_catalog, try_load_catalog};
pub use registrations::{RegistrationLog, RegistrationRecord};
