// Library exports for talentnet-core
// The store is the only owner of the dataset; consumers borrow it.

pub mod config;
pub mod error;
pub mod generator;
pub mod ids;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use ids::generate_id;
pub use store::{Dataset, TalentStore};
