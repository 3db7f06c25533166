use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::template::TemplateKind;

/// Where rendering continued after a template failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The configured 500 template
    InternalServerError,
    /// The built-in 500 page
    Terminal,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::InternalServerError => f.write_str("internal-server-error"),
            Fallback::Terminal => f.write_str("terminal"),
        }
    }
}

/// One degrade transition of the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradeEvent {
    /// Kind whose template failed
    pub kind: TemplateKind,
    /// Request path being rendered
    pub path: String,
    /// Display form of the load or execution error
    pub cause: String,
    pub fallback: Fallback,
}

/// Logging collaborator of the renderer
pub trait EventRecorder: Send + Sync {
    fn record(&self, event: &DegradeEvent);
}

impl<R: EventRecorder + ?Sized> EventRecorder for Arc<R> {
    fn record(&self, event: &DegradeEvent) {
        (**self).record(event);
    }
}

impl<R: EventRecorder + ?Sized> EventRecorder for &R {
    fn record(&self, event: &DegradeEvent) {
        (**self).record(event);
    }
}

/// Emits every event as a structured `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl EventRecorder for TracingRecorder {
    fn record(&self, event: &DegradeEvent) {
        warn!(
            kind = %event.kind,
            path = %event.path,
            cause = %event.cause,
            fallback = %event.fallback,
            "error page template failed, degrading"
        );
    }
}

/// Keeps events in memory, for template checks and tests
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    events: Mutex<Vec<DegradeEvent>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DegradeEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn take(&self) -> Vec<DegradeEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventRecorder for MemoryRecorder {
    fn record(&self, event: &DegradeEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
