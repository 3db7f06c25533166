#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod telemetry;
pub mod template;

pub use config::{load_from_path, Config, TemplateConfig};
pub use error::{ErrpageError, Result, TemplateError};
pub use render::{RenderContext, Renderer, ResponseWriter, TargetSummary, HTML_CONTENT_TYPE};
pub use telemetry::{DegradeEvent, EventRecorder, Fallback, MemoryRecorder, TracingRecorder};
pub use template::{check_templates, TemplateCheck, TemplateKind};
