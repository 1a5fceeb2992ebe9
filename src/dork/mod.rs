//! Dork query builder / Dork查询构建
//!
//! Pure, deterministic assembly of search-engine query strings from
//! [`DorkCriteria`](crate::models::DorkCriteria).

pub mod builder;
pub mod vocabulary;

pub use builder::{build_query, build_search_url};
pub use vocabulary::{Categories, Category, CATEGORY_ORDER};
