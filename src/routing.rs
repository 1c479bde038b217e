//! Hash Routing
//!
//! Routes live in the URL fragment (`#/todos/3/edit`) so the bundle can be
//! served as static files. The current route is a signal; pages re-render
//! when it changes.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Detail(u32),
    Edit(u32),
    Login,
    /// `todos/<id>` where `<id>` is not a positive integer
    MissingTodo,
}

impl Route {
    /// Parse a path or hash. Unknown paths land on the list.
    pub fn parse(location: &str) -> Self {
        let path = location.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["todos", "new"] => Route::Create,
            ["todos", id] => parse_id(id).map(Route::Detail).unwrap_or(Route::MissingTodo),
            ["todos", id, "edit"] => parse_id(id).map(Route::Edit).unwrap_or(Route::MissingTodo),
            ["login"] => Route::Login,
            _ => Route::List,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List | Route::MissingTodo => "/todos".to_string(),
            Route::Create => "/todos/new".to_string(),
            Route::Detail(id) => format!("/todos/{}", id),
            Route::Edit(id) => format!("/todos/{}/edit", id),
            Route::Login => "/login".to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

fn parse_id(segment: &str) -> Option<u32> {
    segment.parse::<u32>().ok().filter(|id| *id > 0)
}

/// Route that should actually render: protected routes need a session
pub fn guard(route: Route, authenticated: bool) -> Route {
    if route.requires_auth() && !authenticated {
        Route::Login
    } else {
        route
    }
}

/// Programmatic navigation, provided via context
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            route: RwSignal::new(initial),
        }
    }

    /// Route from the browser's current `location.hash`
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        Self::new(Route::parse(&current_hash()))
    }

    /// Tracked
    pub fn route(&self) -> Route {
        self.route.get()
    }

    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.route.set(route);
        }
        #[cfg(target_arch = "wasm32")]
        set_hash(&route.path());
    }

    /// Follow a `hashchange` (back/forward, typed URL)
    #[cfg(target_arch = "wasm32")]
    pub fn sync_from_location(&self) {
        let route = Route::parse(&current_hash());
        if self.route.get_untracked() != route {
            self.route.set(route);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn set_hash(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("#/"), Route::List);
        assert_eq!(Route::parse("#/todos"), Route::List);
        assert_eq!(Route::parse("#/todos/new"), Route::Create);
        assert_eq!(Route::parse("#/todos/12"), Route::Detail(12));
        assert_eq!(Route::parse("/todos/12/edit/"), Route::Edit(12));
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/somewhere/else"), Route::List);
    }

    #[test]
    fn test_bad_ids_are_missing() {
        assert_eq!(Route::parse("#/todos/abc"), Route::MissingTodo);
        assert_eq!(Route::parse("#/todos/0"), Route::MissingTodo);
        assert_eq!(Route::parse("#/todos/-4/edit"), Route::MissingTodo);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::List, Route::Create, Route::Detail(3), Route::Edit(3), Route::Login] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(guard(Route::List, false), Route::Login);
        assert_eq!(guard(Route::Edit(2), false), Route::Login);
        assert_eq!(guard(Route::Login, false), Route::Login);
        assert_eq!(guard(Route::Detail(2), true), Route::Detail(2));
    }

    #[test]
    fn test_navigator() {
        let navigator = Navigator::new(Route::List);
        navigator.navigate(Route::Detail(5));
        assert_eq!(navigator.route.get_untracked(), Route::Detail(5));
    }
}
