pub mod model;
pub mod pagination;
pub mod repository;

pub use model::{User, UserPayload};
pub use pagination::{ListParams, Pagination};
pub use repository::RepositoryError;
