pub mod ids;
pub mod person;

pub use ids::{Slug, ViafId};
pub use person::PersonFields;
