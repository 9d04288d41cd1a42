pub mod aggregate;
pub mod client;
pub mod error;
pub mod reduce;
pub mod types;

pub use aggregate::{load_all, load_all_with_limit, load_road, LoadReport};
pub use client::AutobahnClient;
pub use error::{ApiError, LoadError, RoadFailure};
pub use reduce::{summarize_road, RoadResources, RoadSummary};
pub use types::{ResourceEntry, ResourceKind, ResourceList, RoadId};
