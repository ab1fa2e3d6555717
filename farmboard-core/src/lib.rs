//! farmboard-core: request-independent logic for the farmboard web app
//!
//! - [`pagination`]: page/offset arithmetic for list views
//! - [`report`]: reshaping reporting rows into chart datasets
//! - [`like`]: the per-client like toggle

pub mod error;
pub mod like;
pub mod pagination;
pub mod report;

pub use error::{CoreError, Result};
pub use like::{LikeState, LikeTransition};
pub use pagination::{Paginated, Pagination, PaginationParams, DEFAULT_PER_PAGE};
pub use report::{
    BreedGrowth, BreedGrowthRow, Dashboard, DestinationBreedCount, DestinationMatrix,
    EnvFailurePoint, EnvFailureRow, FarmPassRates, FarmTally, ScatterPoint,
};
