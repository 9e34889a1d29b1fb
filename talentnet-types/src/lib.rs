pub mod enums;
pub mod filters;
pub mod models;

pub use enums::*;
pub use filters::*;
pub use models::*;
