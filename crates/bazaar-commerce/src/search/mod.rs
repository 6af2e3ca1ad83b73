//! Catalog query engine.
//!
//! Pure functions from a product slice plus a query to an ordered view:
//! listing filters and sorts, live search suggestions and category counts.

mod facets;
mod filter;
mod query;
mod suggest;

pub use facets::{category_facets, CategoryFacet};
pub use filter::Filter;
pub use query::{CatalogQuery, SortOption};
pub use suggest::{suggest, Suggester};
