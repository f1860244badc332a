pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    http::HttpCatalogSource,
    sink::{FileSink, StdoutSink},
};
pub use config::{cli::LocalStorage, EstimatorSettings};
pub use crate::core::{
    estimator::Estimator,
    inquiry::MailtoMessage,
    loader::{load_catalog, CatalogLoader},
};
pub use domain::model::{
    AddonEntry, BreedPriceEntry, Catalog, Inquiry, SelectionState, ServiceKind, TotalResult,
};
pub use utils::error::{EstimatorError, Result};
