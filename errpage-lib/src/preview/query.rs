/// Query parameters understood by the preview server
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PreviewQuery {
    pub kind: Option<String>,
    pub error: Option<String>,
}

impl PreviewQuery {
    /// Decode an `application/x-www-form-urlencoded` query; unknown keys are ignored
    pub fn parse(query: Option<&str>) -> Self {
        let mut parsed = Self::default();
        let Some(query) = query else {
            return parsed;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "kind" => parsed.kind = Some(value.into_owned()),
                "error" => parsed.error = Some(value.into_owned()),
                _ => {}
            }
        }
        parsed
    }
}
