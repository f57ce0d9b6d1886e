//! HTML redirect page

use crate::badge::BadgeUrl;

/// Meta-refresh page that sends the browser straight to a badge image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPage {
    url: String,
}

impl RedirectPage {
    /// Create a page redirecting to `url`
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Redirect target
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Render the page
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"
<head><meta http-equiv="refresh" content="0; url={url}" /></head>
<body>Redirecting...</body>
"#,
            url = self.url
        )
    }
}

impl From<&BadgeUrl> for RedirectPage {
    fn from(badge: &BadgeUrl) -> Self {
        Self::new(badge.to_string())
    }
}
