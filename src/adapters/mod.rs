// Adapters layer: concrete implementations for external systems (remote catalogs, inquiry delivery).

pub mod http;
pub mod sink;
