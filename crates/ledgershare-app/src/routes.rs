//! Navigation targets and the session guard applied on entry.

use ledgershare_core::models::client::ClientId;
use ledgershare_core::models::identity::Identity;
use ledgershare_portal::views::ClientFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Clients,
    ClientDetail(ClientId),
    Documents(ClientFilter),
    Profile,
    NotFound,
}

impl Route {
    /// Parse a path with an optional query string, e.g.
    /// `/documents?clientId=2`.
    pub fn parse(target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            ["clients"] => Route::Clients,
            ["clients", id] => Route::ClientDetail(ClientId::new(*id)),
            ["documents"] => Route::Documents(ClientFilter::from_param(query_param(
                query, "clientId",
            ))),
            ["profile"] => Route::Profile,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".into(),
            Route::Login => "/login".into(),
            Route::Register => "/register".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::Clients => "/clients".into(),
            Route::ClientDetail(id) => format!("/clients/{id}"),
            Route::Documents(ClientFilter::All) => "/documents".into(),
            Route::Documents(ClientFilter::Only(id)) => format!("/documents?clientId={id}"),
            Route::Profile => "/profile".into(),
            Route::NotFound => "/404".into(),
        }
    }

    fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Clients
                | Route::ClientDetail(_)
                | Route::Documents(_)
                | Route::Profile
        )
    }

    fn accountant_only(&self) -> bool {
        matches!(self, Route::Clients | Route::ClientDetail(_))
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Where a visitor actually lands when asking for `route`.
pub fn guard(route: Route, viewer: Option<&Identity>) -> Route {
    match viewer {
        None if route.requires_session() => Route::Login,
        None => route,
        Some(_) if matches!(route, Route::Root | Route::Login | Route::Register) => {
            Route::Dashboard
        }
        Some(identity) if route.accountant_only() && !identity.is_accountant() => {
            Route::Dashboard
        }
        Some(_) => route,
    }
}
