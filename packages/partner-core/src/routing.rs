//! Admin paths and the session guard

use std::fmt;
use std::str::FromStr;
use std::string::FromUtf8Error;

use crate::session::Credential;

/// A view of the admin panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminPath {
    Login,
    Dashboard,
    Settings,
    Slider,
    Contacts,
    Careers,
    Search { query: String },
}

impl AdminPath {
    /// Build the search route for a query. The query is used as given.
    pub fn search(query: impl Into<String>) -> Self {
        AdminPath::Search {
            query: query.into(),
        }
    }

    /// Whether a credential is required to render this view
    pub fn is_protected(&self) -> bool {
        !matches!(self, AdminPath::Login)
    }
}

impl fmt::Display for AdminPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminPath::Login => f.write_str("/admin/login"),
            AdminPath::Dashboard => f.write_str("/admin"),
            AdminPath::Settings => f.write_str("/admin/settings"),
            AdminPath::Slider => f.write_str("/admin/slider"),
            AdminPath::Contacts => f.write_str("/admin/contacts"),
            AdminPath::Careers => f.write_str("/admin/careers"),
            AdminPath::Search { query } => {
                write!(f, "/admin/search?q={}", SearchQuery::new(query.as_str()))
            }
        }
    }
}

/// Search text carried in the `q` query argument.
///
/// Displays percent-encoded and parses from the encoded form, treating `+`
/// as a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&urlencoding::encode(&self.0))
    }
}

impl FromStr for SearchQuery {
    type Err = FromUtf8Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let spaced = raw.replace('+', " ");
        urlencoding::decode(&spaced).map(|decoded| Self(decoded.into_owned()))
    }
}

/// Outcome of guarding one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(AdminPath),
    Redirect(AdminPath),
}

/// Decide whether a requested view renders or redirects.
///
/// Unmatched paths go to the dashboard, which is itself guarded on the next
/// decision. Protected views without a credential go to login and the
/// requested path is discarded.
pub fn guard(requested: Option<AdminPath>, credential: Option<&Credential>) -> GuardDecision {
    match requested {
        None => GuardDecision::Redirect(AdminPath::Dashboard),
        Some(path) if path.is_protected() && credential.is_none() => {
            GuardDecision::Redirect(AdminPath::Login)
        }
        Some(path) => GuardDecision::Render(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credential() -> Credential {
        Credential::new(json!({"username": "admin"})).unwrap()
    }

    #[test]
    fn test_search_query_encodes_reserved_characters() {
        assert_eq!(SearchQuery::new("therapy").to_string(), "therapy");
        assert_eq!(
            SearchQuery::new("parent & school").to_string(),
            "parent%20%26%20school"
        );
        assert_eq!(SearchQuery::new("a=b?c#d").to_string(), "a%3Db%3Fc%23d");
    }

    #[test]
    fn test_search_query_decodes_percent_and_plus() {
        let decoded: SearchQuery = "speech%20therapy".parse().unwrap();
        assert_eq!(decoded.as_str(), "speech therapy");

        let decoded: SearchQuery = "a+b".parse().unwrap();
        assert_eq!(decoded.as_str(), "a b");

        assert!("%FF".parse::<SearchQuery>().is_err());
    }

    #[test]
    fn test_search_location_uses_encoded_query() {
        assert_eq!(
            AdminPath::search("parent & school").to_string(),
            "/admin/search?q=parent%20%26%20school"
        );
    }

    #[test]
    fn test_login_is_never_guarded() {
        assert_eq!(
            guard(Some(AdminPath::Login), None),
            GuardDecision::Render(AdminPath::Login)
        );
        assert_eq!(
            guard(Some(AdminPath::Login), Some(&credential())),
            GuardDecision::Render(AdminPath::Login)
        );
    }

    #[test]
    fn test_protected_view_requires_credential() {
        assert_eq!(
            guard(Some(AdminPath::Settings), None),
            GuardDecision::Redirect(AdminPath::Login)
        );
        assert_eq!(
            guard(Some(AdminPath::Settings), Some(&credential())),
            GuardDecision::Render(AdminPath::Settings)
        );
    }

    #[test]
    fn test_unmatched_goes_to_dashboard() {
        assert_eq!(guard(None, None), GuardDecision::Redirect(AdminPath::Dashboard));
        assert_eq!(
            guard(None, Some(&credential())),
            GuardDecision::Redirect(AdminPath::Dashboard)
        );
    }
}
