//! Pure data structures shared by the catalog, the cart, and checkout.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
