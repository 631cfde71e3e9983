mod defaults;
mod store;
pub mod views;

pub use defaults::default_products;
pub use store::{CatalogStore, StoredOverrides};
pub use views::{Collection, ImageResolver, slugify};
