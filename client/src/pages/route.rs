//! Typed table of the site's routes.
//!
//! DESIGN
//! ======
//! The router and the header navigation both iterate this enum, so a page
//! cannot be routed without also being linked (or the other way round).

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// One of the four routed pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageRoute {
    Home,
    Components,
    Interactivity,
    About,
}

impl PageRoute {
    /// All routes in navigation order.
    pub const ALL: [PageRoute; 4] = [Self::Home, Self::Components, Self::Interactivity, Self::About];

    /// Absolute URL path for the route.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Components => "/components",
            Self::Interactivity => "/interactivity",
            Self::About => "/about",
        }
    }

    /// Path segment as the router matches it (no leading slash).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Components => "components",
            Self::Interactivity => "interactivity",
            Self::About => "about",
        }
    }

    /// Navigation label shown in the header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Components => "Components",
            Self::Interactivity => "Interactivity",
            Self::About => "About",
        }
    }

    /// Resolve a URL path to a route. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}
