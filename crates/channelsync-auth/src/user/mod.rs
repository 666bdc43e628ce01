//! User identity records and the input payload used to create or update them.

pub mod model;
pub mod update;

pub use model::User;
pub use update::UserUpdate;
