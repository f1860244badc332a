pub mod estimator;
pub mod inquiry;
pub mod loader;

pub use crate::domain::model::{Catalog, Inquiry, SelectionState, TotalResult};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, InquirySink};
pub use crate::utils::error::Result;
