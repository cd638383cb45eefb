//! The site's fixed route table.

use crate::error::{Result, SiteError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Work,
    Patents,
    ProductLaunchTalks,
    Kids,
    Alphabet,
    Hockey,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::About,
        Route::Work,
        Route::Patents,
        Route::ProductLaunchTalks,
        Route::Kids,
        Route::Alphabet,
        Route::Hockey,
    ];

    /// Parse a URL path. Query string, fragment and a trailing slash are ignored.
    pub fn parse(path: &str) -> Result<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/work" => Route::Work,
            "/work/patents" => Route::Patents,
            "/work/product-launch-talks" => Route::ProductLaunchTalks,
            "/kids" => Route::Kids,
            "/kids/alphabet" => Route::Alphabet,
            "/kids/hockey" => Route::Hockey,
            _ => return Err(SiteError::UnknownRoute(path.to_string())),
        };
        Ok(route)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Work => "/work",
            Route::Patents => "/work/patents",
            Route::ProductLaunchTalks => "/work/product-launch-talks",
            Route::Kids => "/kids",
            Route::Alphabet => "/kids/alphabet",
            Route::Hockey => "/kids/hockey",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Dylan's Website",
            Route::About => "About",
            Route::Work => "Work",
            Route::Patents => "Patents",
            Route::ProductLaunchTalks => "Product Launch Talks",
            Route::Kids => "Kids Games",
            Route::Alphabet => "Alphabet",
            Route::Hockey => "Hockey",
        }
    }

    /// Where the page's back link points.
    pub fn parent(self) -> Option<Route> {
        match self {
            Route::Home => None,
            Route::About | Route::Work | Route::Kids => Some(Route::Home),
            Route::Patents | Route::ProductLaunchTalks => Some(Route::Work),
            Route::Alphabet | Route::Hockey => Some(Route::Kids),
        }
    }

    pub fn is_game(self) -> bool {
        matches!(self, Route::Alphabet | Route::Hockey)
    }
}
