//! Navigation routes.
//!
//! Every path the site answers maps to exactly one [`Route`]. There are no
//! parameters, nesting or redirects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Nutrition,
    Exercise,
    Wellness,
    Resources,
    Training,
    About,
    Contact,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Nutrition,
        Route::Exercise,
        Route::Wellness,
        Route::Resources,
        Route::Training,
        Route::About,
        Route::Contact,
    ];

    /// Resolve a navigation path. A single trailing slash is ignored.
    /// Unknown paths return `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Nutrition => "/nutrition",
            Route::Exercise => "/exercise",
            Route::Wellness => "/wellness",
            Route::Resources => "/resources",
            Route::Training => "/training",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    /// Label used in navigation links.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Nutrition => "Nutrition",
            Route::Exercise => "Exercise",
            Route::Wellness => "Wellness",
            Route::Resources => "Resources",
            Route::Training => "Training",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Shown in the header bar. Home is reached through the logo instead.
    pub fn in_header_nav(&self) -> bool {
        !matches!(self, Route::Home)
    }

    /// Shown under "Quick Links" in the footer.
    pub fn in_footer_links(&self) -> bool {
        matches!(
            self,
            Route::Nutrition | Route::Exercise | Route::Wellness | Route::Resources
        )
    }

    /// File the rendered page is written to, relative to the output root.
    pub fn output_file(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| format!("unknown route: {s}"))
    }
}
