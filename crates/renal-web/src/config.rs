//! Site configuration passed to every rendered page.

use chrono::{Datelike, Utc};
use std::path::PathBuf;

/// Default site name shown in the header and footer.
pub const DEFAULT_SITE_NAME: &str = "Renal Transplant App (Demo)";

/// Per-site settings shared by all requests.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Name shown in the header and footer
    pub site_name: String,

    /// Footer year. `None` means the current UTC year at request time.
    pub year: Option<i32>,

    /// Directory served for paths no route matches (CSS, images, scripts)
    pub public_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            year: None,
            public_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            ..Default::default()
        }
    }

    /// Pin the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    /// Resolve the values a page needs for this request.
    pub fn page_context(&self) -> PageContext<'_> {
        PageContext {
            site_name: &self.site_name,
            year: self.year.unwrap_or_else(|| Utc::now().year()),
        }
    }
}

/// Values available to every page for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext<'a> {
    pub site_name: &'a str,
    pub year: i32,
}
