#[cfg(feature = "app_tracing")]
pub mod tracing;
