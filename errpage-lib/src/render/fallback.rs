/// Last-resort 500 page, used when the configured 500 template is unusable
///
/// Plain string interpolation only: no I/O and no template engine, so it
/// cannot fail.
pub(crate) fn internal_server_error(error: &str) -> String {
    format!(
        "
<!DOCTYPE html>
<html>
  <body>
\t<h1>Internal Server Error</h1>
\t<p>{error}</p>
  </body>
</html>
"
    )
}
