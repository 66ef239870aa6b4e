pub mod assignments;
pub mod classes;
pub mod common;
pub mod materials;
pub mod missions;
pub mod reviews;
pub mod stats;
pub mod submissions;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
