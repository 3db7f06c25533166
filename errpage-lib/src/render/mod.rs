mod context;
mod fallback;
mod writer;

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;

use crate::config::TemplateConfig;
use crate::error::TemplateError;
use crate::telemetry::{DegradeEvent, EventRecorder, Fallback, TracingRecorder};
use crate::template::{resolve, TemplateEngine, TemplateKind};

pub use context::{RenderContext, TargetSummary};
pub use writer::ResponseWriter;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Renders error and listing pages into a [`ResponseWriter`]
///
/// Every entry point writes exactly one complete response. When the requested
/// template cannot be loaded or executed, the response degrades to the
/// configured 500 page, and from there to a built-in 500 page. Each degrade is
/// reported to the injected [`EventRecorder`].
#[derive(Debug)]
pub struct Renderer<R = TracingRecorder> {
    engine: TemplateEngine,
    recorder: R,
}

impl Renderer<TracingRecorder> {
    pub fn new() -> Self {
        Self::with_recorder(TracingRecorder)
    }
}

impl Default for Renderer<TracingRecorder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EventRecorder> Renderer<R> {
    pub fn with_recorder(recorder: R) -> Self {
        Self { engine: TemplateEngine::new(), recorder }
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// 400 page; uses `path` and `error`
    pub fn bad_request<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        self.render(TemplateKind::BadRequest, writer, config, ctx, inline);
    }

    /// 401 page; uses `path`
    pub fn unauthorized<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        self.render(TemplateKind::Unauthorized, writer, config, ctx, inline);
    }

    /// 403 page; uses `path`
    pub fn forbidden<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        self.render(TemplateKind::Forbidden, writer, config, ctx, inline);
    }

    /// 404 page; uses `path`
    pub fn not_found<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        self.render(TemplateKind::NotFound, writer, config, ctx, inline);
    }

    /// 500 page; uses `path` and `error`
    pub fn internal_server_error<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        self.render(TemplateKind::InternalServerError, writer, config, ctx, inline);
    }

    /// 200 listing page; uses `path` and `targets`
    pub fn target_list<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        self.render(TemplateKind::TargetList, writer, config, ctx, inline);
    }

    /// Render `kind`, degrading to the 500 page on any template failure
    pub fn render<W: ResponseWriter + ?Sized>(
        &self,
        kind: TemplateKind,
        writer: &mut W,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) {
        let err = match self.produce(kind, config, ctx, inline) {
            Ok(body) => return write_html(writer, kind.status(), body),
            Err(err) => err,
        };

        // Retrying the 500 file would repeat the read that just failed
        if kind == TemplateKind::InternalServerError && !has_inline(inline) {
            return self.terminal(writer, kind, ctx, err);
        }

        self.report(kind, ctx, &err, Fallback::InternalServerError);
        let degraded = ctx.clone().with_error(&err);
        match self.produce(TemplateKind::InternalServerError, config, &degraded, None) {
            Ok(body) => write_html(writer, StatusCode::INTERNAL_SERVER_ERROR, body),
            Err(err) => self.terminal(writer, TemplateKind::InternalServerError, ctx, err),
        }
    }

    fn produce(
        &self,
        kind: TemplateKind,
        config: &TemplateConfig,
        ctx: &RenderContext,
        inline: Option<&str>,
    ) -> Result<String, TemplateError> {
        let source = resolve(config, kind, inline)?;
        self.engine.execute(&source, ctx)
    }

    fn terminal<W: ResponseWriter + ?Sized>(
        &self,
        writer: &mut W,
        kind: TemplateKind,
        ctx: &RenderContext,
        err: TemplateError,
    ) {
        self.report(kind, ctx, &err, Fallback::Terminal);
        let body = fallback::internal_server_error(&err.to_string());
        write_html(writer, StatusCode::INTERNAL_SERVER_ERROR, body);
    }

    fn report(&self, kind: TemplateKind, ctx: &RenderContext, err: &TemplateError, fallback: Fallback) {
        self.recorder.record(&DegradeEvent {
            kind,
            path: ctx.path().to_string(),
            cause: err.to_string(),
            fallback,
        });
    }
}

fn has_inline(inline: Option<&str>) -> bool {
    inline.is_some_and(|text| !text.is_empty())
}

fn write_html<W: ResponseWriter + ?Sized>(writer: &mut W, status: StatusCode, body: String) {
    writer.set_header(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    writer.set_status(status);
    writer.write_body(Bytes::from(body));
}
