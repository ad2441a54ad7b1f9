//! Single-page router.
//!
//! The page holds one section per route; navigating shows the section whose
//! name matches and marks the matching nav button active. A route name that
//! matches nothing hides every section.

use std::fmt;

/// A page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog,
    Cart,
    Auth,
    Feedback,
}

impl Route {
    /// All routes, in nav order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Catalog,
        Self::Cart,
        Self::Auth,
        Self::Feedback,
    ];

    /// The route name used in URLs and `data-route` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::Cart => "cart",
            Self::Auth => "auth",
            Self::Feedback => "feedback",
        }
    }

    /// Nav button text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Catalog => "Catalog",
            Self::Cart => "Cart",
            Self::Auth => "Login",
            Self::Feedback => "Feedback",
        }
    }

    /// URL path of the page showing this section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::Cart => "/cart",
            Self::Auth => "/auth",
            Self::Feedback => "/feedback",
        }
    }

    /// Look up a route by exact name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.as_str() == name)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL path of the page for a raw route name.
#[must_use]
pub fn path_for(name: &str) -> String {
    Route::parse(name).map_or_else(|| format!("/{name}"), |route| route.path().to_string())
}

/// One nav button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Section visibility and nav state for the current route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    current: Option<Route>,
}

impl Navigation {
    /// Navigation state for a raw route name.
    #[must_use]
    pub fn for_route(name: &str) -> Self {
        Self {
            current: Route::parse(name),
        }
    }

    /// The current route, if the name matched one.
    #[must_use]
    pub const fn current(self) -> Option<Route> {
        self.current
    }

    /// Whether `route`'s section is shown.
    #[must_use]
    pub fn is_visible(self, route: Route) -> bool {
        self.current == Some(route)
    }

    /// Nav buttons with at most one marked active.
    #[must_use]
    pub fn items(self) -> Vec<NavItem> {
        Route::ALL
            .into_iter()
            .map(|route| NavItem {
                route: route.as_str(),
                label: route.label(),
                path: route.path(),
                active: self.is_visible(route),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_section_visible() {
        for route in Route::ALL {
            let nav = Navigation::for_route(route.as_str());
            let visible = Route::ALL
                .into_iter()
                .filter(|r| nav.is_visible(*r))
                .collect::<Vec<_>>();
            assert_eq!(visible, vec![route]);

            let active = nav.items().into_iter().filter(|i| i.active).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_unknown_route_hides_everything() {
        let nav = Navigation::for_route("orders");
        assert_eq!(nav.current(), None);
        assert!(Route::ALL.into_iter().all(|r| !nav.is_visible(r)));
        assert!(nav.items().iter().all(|i| !i.active));
    }

    #[test]
    fn test_route_names_are_case_sensitive() {
        assert_eq!(Route::parse("cart"), Some(Route::Cart));
        assert_eq!(Route::parse("Cart"), None);
    }

    #[test]
    fn test_path_for() {
        assert_eq!(path_for("home"), "/");
        assert_eq!(path_for("cart"), "/cart");
        assert_eq!(path_for("orders"), "/orders");
    }
}
