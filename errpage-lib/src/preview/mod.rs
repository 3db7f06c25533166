//! Preview server for template authors.
//!
//! Answers every request with an error page for the request path, so a
//! deployment's templates can be checked in a browser. `?kind=` picks the page
//! (default from `[preview] default_kind`) and `?error=` fills the error field.

mod query;
pub mod server;

use std::time::Duration;

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;

use crate::config::{Config, TemplateConfig};
use crate::error::Result;
use crate::render::{RenderContext, Renderer};
use crate::telemetry::{EventRecorder, TracingRecorder};
use crate::template::TemplateKind;

use query::PreviewQuery;

pub use server::run;

/// Shared, read-only state of the preview server
#[derive(Debug)]
pub struct PreviewState<R = TracingRecorder> {
    pub renderer: Renderer<R>,
    pub templates: TemplateConfig,
    pub default_kind: TemplateKind,
    pub shutdown_timeout: Duration,
}

impl PreviewState<TracingRecorder> {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_renderer(config, Renderer::new())
    }
}

impl<R: EventRecorder> PreviewState<R> {
    pub fn with_renderer(config: &Config, renderer: Renderer<R>) -> Result<Self> {
        Ok(Self {
            renderer,
            templates: config.templates.clone(),
            default_kind: config.preview.default_kind.parse()?,
            shutdown_timeout: Duration::from_secs(config.preview.shutdown_secs),
        })
    }
}

/// Render the page requested by `req`
pub fn handle<R: EventRecorder, B>(state: &PreviewState<R>, req: &Request<B>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    let query = PreviewQuery::parse(req.uri().query());
    let mut ctx = RenderContext::new(req.uri().path());
    if let Some(error) = query.error {
        ctx = ctx.with_error(error);
    }

    let kind = match query.kind.as_deref() {
        None => state.default_kind,
        Some(name) => match name.parse::<TemplateKind>() {
            Ok(kind) => kind,
            Err(_) => {
                let ctx = ctx.with_error(format!("unknown error page kind: {name}"));
                state.renderer.bad_request(&mut response, &state.templates, &ctx, None);
                return response;
            }
        },
    };

    state.renderer.render(kind, &mut response, &state.templates, &ctx, None);
    response
}
