//! Typed client wrappers around the actor channels.
//!
//! The rest of the system never touches raw channels; it holds these
//! cloneable clients, which map transport failures into each component's
//! error type.

pub mod cart_client;
pub mod catalog_client;
pub mod mock;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
