use std::str::FromStr;

use thiserror::Error;

/// All navigable destinations of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Register,
    Login,
    EditProfile,
    ChangePassword,
    Vehicles,
    CreateVehicle,
    EditVehicle,
    ActiveParkings,
    OrderParking,
    ParkingHistory,
    ParkingDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route name: {0}")]
pub struct UnknownRoute(pub String);

impl Page {
    pub const ALL: [Self; 12] = [
        Self::Home,
        Self::Register,
        Self::Login,
        Self::EditProfile,
        Self::ChangePassword,
        Self::Vehicles,
        Self::CreateVehicle,
        Self::EditVehicle,
        Self::ActiveParkings,
        Self::OrderParking,
        Self::ParkingHistory,
        Self::ParkingDetails,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Register => "register",
            Self::Login => "login",
            Self::EditProfile => "profile.edit",
            Self::ChangePassword => "profile.change-password",
            Self::Vehicles => "vehicles.index",
            Self::CreateVehicle => "vehicles.create",
            Self::EditVehicle => "vehicles.edit",
            Self::ActiveParkings => "parkings.active",
            Self::OrderParking => "parkings.create",
            Self::ParkingHistory => "parkings.history",
            Self::ParkingDetails => "parkings.show",
        }
    }

    /// Path template; `:name` segments are placeholders.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Register => "/register",
            Self::Login => "/login",
            Self::EditProfile => "/profile",
            Self::ChangePassword => "/profile/password",
            Self::Vehicles => "/vehicles",
            Self::CreateVehicle => "/vehicles/create",
            Self::EditVehicle => "/vehicles/:id",
            Self::ActiveParkings => "/parkings/active",
            Self::OrderParking => "/parkings/new",
            Self::ParkingHistory => "/parkings/history",
            Self::ParkingDetails => "/parkings/:id",
        }
    }

    /// Replaces the first `:key` of the template for every given parameter.
    ///
    /// Parameters without a placeholder are ignored,
    /// placeholders without a parameter are kept as they are.
    #[must_use]
    pub fn resolve(self, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.path().to_owned(), |path, (key, value)| {
                path.replacen(&format!(":{key}"), value, 1)
            })
    }

    #[must_use]
    pub fn with_id(self, id: u64) -> String {
        self.resolve(&[("id", &id.to_string())])
    }
}

impl FromStr for Page {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.name() == s)
            .ok_or_else(|| UnknownRoute(s.to_owned()))
    }
}

/// Resolves a route name into a concrete path.
pub fn resolve(name: &str, params: &[(&str, &str)]) -> Result<String, UnknownRoute> {
    let page = name.parse::<Page>()?;
    Ok(page.resolve(params))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn resolve_named_routes() {
        assert_eq!(resolve("home", &[]).unwrap(), "/");
        assert_eq!(resolve("vehicles.edit", &[("id", "7")]).unwrap(), "/vehicles/7");
        assert_eq!(resolve("parkings.active", &[]).unwrap(), "/parkings/active");
    }

    #[test]
    fn unknown_name_fails() {
        assert_eq!(
            resolve("vehicles.delete", &[("id", "7")]),
            Err(UnknownRoute("vehicles.delete".into()))
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve("parkings.show", &[("id", "3")]);
        let second = resolve("parkings.show", &[("id", "3")]);
        assert_eq!(first, second);
    }

    #[test]
    fn ignore_unreferenced_params() {
        assert_eq!(Page::Vehicles.resolve(&[("id", "1")]), "/vehicles");
    }

    #[test]
    fn keep_uncovered_placeholders() {
        assert_eq!(Page::EditVehicle.resolve(&[]), "/vehicles/:id");
    }

    #[test]
    fn no_url_encoding() {
        assert_eq!(Page::ParkingDetails.resolve(&[("id", "a b/c")]), "/parkings/a b/c");
    }

    #[test]
    fn resolve_with_numeric_id() {
        assert_eq!(Page::ParkingDetails.with_id(42), "/parkings/42");
    }

    #[test]
    fn names_and_paths_are_unique() {
        let names: HashSet<_> = Page::ALL.iter().map(|p| p.name()).collect();
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(names.len(), Page::ALL.len());
        assert_eq!(paths.len(), Page::ALL.len());
        for page in Page::ALL {
            assert_eq!(page.name().parse::<Page>(), Ok(page));
        }
    }
}
