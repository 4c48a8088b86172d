//! Security header middleware for rendered pages

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content Security Policy for rendered pages.
///
/// Pages are self-contained: inline styles and the inline scroll-spy script,
/// remote images over https, and a form posting back to the same origin.
#[derive(Debug, Clone)]
pub struct ContentSecurityPolicy {
    pub default_src: Vec<String>,
    pub style_src: Vec<String>,
    pub script_src: Vec<String>,
    pub img_src: Vec<String>,
    pub form_action: Vec<String>,
    pub base_uri: Vec<String>,
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self {
            default_src: vec!["'none'".to_string()],
            style_src: vec!["'unsafe-inline'".to_string()],
            script_src: vec!["'unsafe-inline'".to_string()],
            img_src: vec!["https:".to_string(), "data:".to_string()],
            form_action: vec!["'self'".to_string()],
            base_uri: vec!["'none'".to_string()],
        }
    }
}

impl ContentSecurityPolicy {
    /// Build the CSP header value
    pub fn to_header_value(&self) -> String {
        let directives = [
            ("default-src", &self.default_src),
            ("style-src", &self.style_src),
            ("script-src", &self.script_src),
            ("img-src", &self.img_src),
            ("form-action", &self.form_action),
            ("base-uri", &self.base_uri),
        ];

        directives
            .iter()
            .filter(|(_, sources)| !sources.is_empty())
            .map(|(name, sources)| format!("{} {}", name, sources.join(" ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Headers attached to every rendered page
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    pub csp: ContentSecurityPolicy,
    pub cache_control: String,
    pub nosniff: bool,
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self {
            csp: ContentSecurityPolicy::default(),
            cache_control: "no-store".to_string(),
            nosniff: true,
        }
    }
}

impl SecurityHeaders {
    /// Header name/value pairs, skipping values that are not valid header text
    pub fn header_pairs(&self) -> Vec<(HeaderName, HeaderValue)> {
        let mut pairs = Vec::new();

        if let Ok(value) = HeaderValue::from_str(&self.cache_control) {
            pairs.push((header::CACHE_CONTROL, value));
        }

        if self.nosniff {
            pairs.push((header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")));
        }

        match HeaderValue::from_str(&self.csp.to_header_value()) {
            Ok(value) => pairs.push((header::CONTENT_SECURITY_POLICY, value)),
            Err(_) => pairs.push((
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_static("default-src 'none'"),
            )),
        }

        pairs
    }
}

/// Wrap every route of `router` with the page security headers
pub fn with_security_headers<S>(router: Router<S>, headers: &SecurityHeaders) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    headers
        .header_pairs()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_header() {
        let header = ContentSecurityPolicy::default().to_header_value();
        assert_eq!(
            header,
            "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; \
             img-src https: data:; form-action 'self'; base-uri 'none'"
        );
    }

    #[test]
    fn test_empty_directives_are_skipped() {
        let csp = ContentSecurityPolicy {
            img_src: Vec::new(),
            ..ContentSecurityPolicy::default()
        };
        assert!(!csp.to_header_value().contains("img-src"));
    }

    #[test]
    fn test_header_pairs() {
        let pairs = SecurityHeaders::default().header_pairs();
        let names: Vec<_> = pairs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["cache-control", "x-content-type-options", "content-security-policy"]);
        assert_eq!(pairs[0].1, "no-store");
    }
}
