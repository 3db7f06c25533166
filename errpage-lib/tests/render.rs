mod common;

use bytes::Bytes;
use common::{
    html, internal_server_error_page, missing_config, missing_message, only_internal_server_error,
    shipped_config, terminal_page, CountingWriter, TestResult,
};
use errpage_lib::{
    Fallback, MemoryRecorder, RenderContext, Renderer, TemplateConfig, TemplateKind,
    HTML_CONTENT_TYPE,
};
use http::header::CONTENT_TYPE;
use http::{Response, StatusCode};

fn render(
    kind: TemplateKind,
    config: &TemplateConfig,
    ctx: &RenderContext,
    inline: Option<&str>,
) -> Response<Bytes> {
    let mut response = Response::new(Bytes::new());
    Renderer::with_recorder(MemoryRecorder::new()).render(kind, &mut response, config, ctx, inline);
    response
}

fn body(response: &Response<Bytes>) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

fn assert_html(response: &Response<Bytes>) {
    let content_types: Vec<_> = response.headers().get_all(CONTENT_TYPE).iter().collect();
    assert_eq!(content_types.len(), 1);
    assert_eq!(content_types[0], HTML_CONTENT_TYPE);
}

fn request1() -> RenderContext {
    RenderContext::new("/request1").with_error("fake")
}

#[test]
fn test_not_found_renders_path() {
    let mut response = Response::new(Bytes::new());
    let renderer = Renderer::new();
    renderer.not_found(&mut response, &shipped_config(), &RenderContext::new("/request1"), None);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_html(&response);
    assert_eq!(body(&response), html("    <h1>Not Found /request1</h1>\n"));
}

#[test]
fn test_bad_request_renders_error() {
    let mut response = Response::new(Bytes::new());
    let renderer = Renderer::new();
    renderer.bad_request(&mut response, &shipped_config(), &request1(), None);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_html(&response);
    assert_eq!(body(&response), html("    <h1>Bad Request</h1>\n    <p>fake</p>\n"));
}

#[test]
fn test_unauthorized_and_forbidden_render_fixed_pages() {
    let config = shipped_config();

    let mut response = Response::new(Bytes::new());
    Renderer::new().unauthorized(&mut response, &config, &request1(), None);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body(&response), html("    <h1>Unauthorized</h1>\n"));

    let mut response = Response::new(Bytes::new());
    Renderer::new().forbidden(&mut response, &config, &request1(), None);
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body(&response), html("    <h1>Forbidden</h1>\n"));
}

#[test]
fn test_internal_server_error_renders_error() {
    let mut response = Response::new(Bytes::new());
    Renderer::new().internal_server_error(&mut response, &shipped_config(), &request1(), None);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_html(&response);
    assert_eq!(body(&response), internal_server_error_page("fake"));
}

#[test]
fn test_missing_error_renders_empty_paragraph() {
    let response = render(
        TemplateKind::BadRequest,
        &shipped_config(),
        &RenderContext::new("/request1"),
        None,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(&response), html("    <h1>Bad Request</h1>\n    <p></p>\n"));
}

#[test]
fn test_inline_template_keeps_status_of_kind() {
    let config = shipped_config();
    let expected = [
        (TemplateKind::BadRequest, StatusCode::BAD_REQUEST),
        (TemplateKind::Unauthorized, StatusCode::UNAUTHORIZED),
        (TemplateKind::Forbidden, StatusCode::FORBIDDEN),
        (TemplateKind::NotFound, StatusCode::NOT_FOUND),
        (TemplateKind::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (kind, status) in expected {
        let response = render(kind, &config, &request1(), Some("Fake template"));
        assert_eq!(response.status(), status, "{kind}");
        assert_html(&response);
        assert_eq!(body(&response), "Fake template", "{kind}");
    }
}

#[test]
fn test_inline_template_ignores_missing_files() -> TestResult {
    let (_dir, config) = missing_config()?;
    let renderer = Renderer::with_recorder(MemoryRecorder::new());

    let mut response = Response::new(Bytes::new());
    renderer.forbidden(&mut response, &config, &request1(), Some("Fake template"));

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body(&response), "Fake template");
    assert!(renderer.recorder().events().is_empty());
    Ok(())
}

#[test]
fn test_inline_template_is_executed() {
    let response = render(
        TemplateKind::NotFound,
        &shipped_config(),
        &request1(),
        Some("<p>{{ path }} / {{ error }}</p>"),
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body(&response), "<p>/request1 / fake</p>");
}

#[test]
fn test_empty_inline_template_uses_file() {
    let response = render(TemplateKind::NotFound, &shipped_config(), &request1(), Some(""));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body(&response), html("    <h1>Not Found /request1</h1>\n"));
}

#[test]
fn test_missing_template_degrades_to_internal_server_error() -> TestResult {
    let (_dir, config) = only_internal_server_error()?;

    for kind in [
        TemplateKind::BadRequest,
        TemplateKind::Unauthorized,
        TemplateKind::Forbidden,
        TemplateKind::NotFound,
        TemplateKind::TargetList,
    ] {
        let response = render(kind, &config, &request1(), None);
        let expected = internal_server_error_page(&missing_message(config.path_for(kind)));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{kind}");
        assert_html(&response);
        assert_eq!(body(&response), expected, "{kind}");
    }
    Ok(())
}

#[test]
fn test_all_templates_missing_uses_terminal_fallback() -> TestResult {
    let (_dir, config) = missing_config()?;
    let expected = terminal_page(&missing_message(&config.internal_server_error));

    for kind in TemplateKind::ALL {
        let response = render(kind, &config, &request1(), None);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{kind}");
        assert_html(&response);
        assert_eq!(body(&response), expected, "{kind}");
    }
    Ok(())
}

#[test]
fn test_degrade_records_one_event_per_transition() -> TestResult {
    let (_dir, config) = missing_config()?;
    let renderer = Renderer::with_recorder(MemoryRecorder::new());

    let mut response = Response::new(Bytes::new());
    renderer.not_found(&mut response, &config, &request1(), None);

    let events = renderer.recorder().take();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, TemplateKind::NotFound);
    assert_eq!(events[0].fallback, Fallback::InternalServerError);
    assert_eq!(events[0].path, "/request1");
    assert_eq!(events[0].cause, missing_message(&config.not_found));
    assert_eq!(events[1].kind, TemplateKind::InternalServerError);
    assert_eq!(events[1].fallback, Fallback::Terminal);
    assert_eq!(events[1].cause, missing_message(&config.internal_server_error));
    Ok(())
}

#[test]
fn test_missing_internal_server_error_goes_straight_to_fallback() -> TestResult {
    let (_dir, config) = missing_config()?;
    let renderer = Renderer::with_recorder(MemoryRecorder::new());

    let mut response = Response::new(Bytes::new());
    renderer.internal_server_error(&mut response, &config, &request1(), None);

    let events = renderer.recorder().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fallback, Fallback::Terminal);
    assert_eq!(body(&response), terminal_page(&missing_message(&config.internal_server_error)));
    Ok(())
}

#[test]
fn test_malformed_template_degrades_like_missing_one() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut config = shipped_config();
    config.unauthorized = dir.path().join("unauthorized.tpl");
    std::fs::write(&config.unauthorized, "<h1>{{ path </h1>")?;

    let renderer = Renderer::with_recorder(MemoryRecorder::new());
    let mut response = Response::new(Bytes::new());
    renderer.unauthorized(&mut response, &config, &request1(), None);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body(&response);
    assert!(page.contains("<h1>Internal Server Error</h1>"), "{page}");
    assert!(page.contains("<p>execute template: "), "{page}");

    let events = renderer.recorder().events();
    assert_eq!(events.len(), 1);
    assert!(events[0].cause.starts_with("execute template: "));
    Ok(())
}

#[test]
fn test_malformed_inline_internal_server_error_uses_configured_file() {
    let renderer = Renderer::with_recorder(MemoryRecorder::new());
    let mut response = Response::new(Bytes::new());
    renderer.internal_server_error(
        &mut response,
        &shipped_config(),
        &request1(),
        Some("{% if %}"),
    );

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body(&response);
    assert!(page.starts_with("<!DOCTYPE html>"), "{page}");
    assert!(page.contains("<p>execute template: "), "{page}");
    assert_eq!(renderer.recorder().events().len(), 1);
}

#[test]
fn test_malformed_inline_with_missing_files_uses_terminal_fallback() -> TestResult {
    let (_dir, config) = missing_config()?;
    let renderer = Renderer::with_recorder(MemoryRecorder::new());
    let mut response = Response::new(Bytes::new());
    renderer.bad_request(&mut response, &config, &request1(), Some("{{"));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body(&response), terminal_page(&missing_message(&config.internal_server_error)));
    assert_eq!(renderer.recorder().events().len(), 2);
    Ok(())
}

#[test]
fn test_one_status_one_header_one_body() -> TestResult {
    let (_dir, degraded) = missing_config()?;
    let renderer = Renderer::with_recorder(MemoryRecorder::new());

    for config in [shipped_config(), degraded] {
        for kind in TemplateKind::ALL {
            let mut writer = CountingWriter::default();
            renderer.render(kind, &mut writer, &config, &request1(), None);

            assert_eq!(writer.status_calls, 1, "{kind}");
            assert_eq!(writer.body_calls, 1, "{kind}");
            assert_eq!(writer.headers.len(), 1, "{kind}");
            assert_eq!(writer.headers[0].0, CONTENT_TYPE);
            assert!(!writer.body.is_empty(), "{kind}");
        }
    }
    Ok(())
}

#[test]
fn test_rendering_twice_is_byte_identical() -> TestResult {
    let (_dir, degraded) = only_internal_server_error()?;

    for config in [shipped_config(), degraded] {
        for kind in TemplateKind::ALL {
            let first = render(kind, &config, &request1(), None);
            let second = render(kind, &config, &request1(), None);

            assert_eq!(first.status(), second.status(), "{kind}");
            assert_eq!(first.headers(), second.headers(), "{kind}");
            assert_eq!(first.body(), second.body(), "{kind}");
        }
    }
    Ok(())
}

#[test]
fn test_renderer_is_shared_across_threads() -> TestResult {
    use std::sync::Arc;
    use std::thread;

    let renderer = Arc::new(Renderer::with_recorder(MemoryRecorder::new()));
    let config = Arc::new(shipped_config());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let renderer = Arc::clone(&renderer);
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let mut response = Response::new(Bytes::new());
                let ctx = RenderContext::new(format!("/request{i}"));
                renderer.not_found(&mut response, &config, &ctx, None);
                (i, response)
            })
        })
        .collect();

    for handle in handles {
        let (i, response) = handle.join().map_err(|_| "render thread panicked")?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(&response), html(&format!("    <h1>Not Found /request{i}</h1>\n")));
    }
    assert!(renderer.recorder().events().is_empty());
    Ok(())
}
