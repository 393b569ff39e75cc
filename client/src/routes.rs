//! Static route table: four literal paths bound to four page units.
//!
//! DESIGN
//! ======
//! The table is plain data. `AppRoute` is a closed enum, so every entry's view
//! is known at compile time and no path can point at a missing page. Matching
//! is an exact lookup; paths carry no parameters or wildcards, so table order
//! never changes the outcome.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Page units the router can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Landing screen (`/`).
    Home,
    /// Play a round of the quiz (`/jugar`).
    Quiz,
    /// Author a new question (`/crear`).
    CrearPregunta,
    /// Past matches (`/historial`).
    Historial,
}

/// One binding from a URL path to a page unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: AppRoute,
}

impl RouteEntry {
    const fn of(route: AppRoute) -> Self {
        Self { path: route.path(), route }
    }
}

/// The application's route table, one entry per [`AppRoute::ALL`] variant.
pub const ROUTE_TABLE: [RouteEntry; 4] = [
    RouteEntry::of(AppRoute::ALL[0]),
    RouteEntry::of(AppRoute::ALL[1]),
    RouteEntry::of(AppRoute::ALL[2]),
    RouteEntry::of(AppRoute::ALL[3]),
];

impl AppRoute {
    /// Every route, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Quiz, Self::CrearPregunta, Self::Historial];

    /// Absolute URL path for this route. The only place a path literal lives.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Quiz => "/jugar",
            Self::CrearPregunta => "/crear",
            Self::Historial => "/historial",
        }
    }

    /// Path without its leading slash, the form `StaticSegment` matches on.
    /// The root route yields the empty segment.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Human-readable label used in the nav bar and document title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Quiz => "Jugar",
            Self::CrearPregunta => "Crear pregunta",
            Self::Historial => "Historial",
        }
    }
}

/// Strip query and fragment, drop one trailing slash on non-root paths, and
/// map the empty string to `/`.
///
/// Returns `None` when what remains is not an absolute path.
pub fn normalize_path(location: &str) -> Option<&str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    if path.is_empty() {
        return Some("/");
    }
    if !path.starts_with('/') {
        return None;
    }
    if path.len() > 1 {
        if let Some(trimmed) = path.strip_suffix('/') {
            return Some(trimmed);
        }
    }
    Some(path)
}

/// Look up the page unit bound to `location`.
///
/// Matching is exact and case-sensitive after [`normalize_path`]. `None` means
/// the path is not in the table and the not-found view applies.
pub fn resolve(location: &str) -> Option<AppRoute> {
    let path = normalize_path(location)?;
    ROUTE_TABLE.iter().find(|entry| entry.path == path).map(|entry| entry.route)
}

/// Canonical URL for a table path written in a non-canonical form.
///
/// `/jugar/?ronda=2` maps to `/jugar?ronda=2`. Returns `None` when `location`
/// is already canonical or is not in the table, so callers only redirect
/// requests that would otherwise render a table view under a second URL.
pub fn canonical_location(location: &str) -> Option<String> {
    let route = resolve(location)?;
    let split = location.find(['?', '#']).unwrap_or(location.len());
    let (path, rest) = location.split_at(split);
    if path == route.path() {
        return None;
    }
    Some(format!("{}{rest}", route.path()))
}
