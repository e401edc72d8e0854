mod breadcrumbs;
mod filters;
mod pagination;
pub mod query_string;

pub use breadcrumbs::build_breadcrumbs;
pub use filters::{build_filters, selected_filter};
pub use pagination::{PageLink, Pagination, RelTag};
