pub mod client;

pub use crate::domain::model::{OperatorRecord, SearchRequest, SearchResponse};
pub use crate::domain::ports::{ApiConfigProvider, OperatorSearch};
pub use crate::utils::error::Result;
