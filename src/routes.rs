//! Application routes shared by the UI router and flow results.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    AboutProject,
    AboutTechnology,
    AboutImpact,
    AboutTeam,
    Auth,
    Dashboard,
    Chat(String),
    User,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::AboutProject => "/about/project".to_string(),
            Route::AboutTechnology => "/about/technology".to_string(),
            Route::AboutImpact => "/about/impact".to_string(),
            Route::AboutTeam => "/about/team".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Chat(id) => format!("/dashboard/{}", id),
            Route::User => "/user".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/about/project" => Route::AboutProject,
            "/about/technology" => Route::AboutTechnology,
            "/about/impact" => Route::AboutImpact,
            "/about/team" => Route::AboutTeam,
            "/auth" => Route::Auth,
            "/dashboard" => Route::Dashboard,
            "/user" => Route::User,
            other => {
                let id = other.strip_prefix("/dashboard/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::Chat(id.to_string())
            }
        };
        Some(route)
    }

    /// Id of the chat shown by this route, if any.
    pub fn chat_id(&self) -> Option<&str> {
        match self {
            Route::Chat(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_paths() {
        for route in [
            Route::Home,
            Route::About,
            Route::AboutTeam,
            Route::Auth,
            Route::Dashboard,
            Route::Chat("6753a1".to_string()),
            Route::User,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/dashboard/a/b"), None);
        assert_eq!(Route::parse("/dashboard/"), Some(Route::Dashboard));
    }
}
