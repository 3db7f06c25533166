pub mod events;
pub mod tracing;

pub use events::{DegradeEvent, EventRecorder, Fallback, MemoryRecorder, TracingRecorder};
pub use tracing::init_tracing;
