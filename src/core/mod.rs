pub mod error;
pub mod pagination;

pub use error::{AppError, Result};
pub use pagination::{Page, PageOptions, SortDirection, SortField};
