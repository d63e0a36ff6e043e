//! Request middleware: trace-id propagation and request time bounds.

pub mod timeout;
pub mod trace;

pub use timeout::RequestTimeout;
pub use trace::Trace;
