/// Rutas del cliente
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Route {
    #[default]
    Home,
    Register,
    Login,
    About,
    Profile,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Register,
        Route::Login,
        Route::About,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::About => "/about",
            Route::Profile => "/profile",
        }
    }

    /// Texto del enlace en el header
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Register => "Register",
            Route::Login => "Login",
            Route::About => "About",
            Route::Profile => "Profile",
        }
    }

    /// Resolver un pathname; rutas desconocidas caen en Home
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_from_its_own_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/register?ref=mail"), Route::Register);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Route::from_path("/admin"), Route::Home);
        assert_eq!(Route::from_path("/login/extra"), Route::Home);
    }
}
