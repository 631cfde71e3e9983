mod category;
mod editor;
mod product;
mod rental;

pub use category::*;
pub use editor::*;
pub use product::*;
pub use rental::*;
