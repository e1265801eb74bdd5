pub mod category;
pub mod product;
pub mod snapshot;

pub use category::Category;
pub use product::{CreateProductInput, Product, ProductPage, ProductPatch, ProductView};
pub use snapshot::{StoredCatalog, SNAPSHOT_VERSION};
