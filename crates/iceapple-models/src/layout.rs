//! Layout page-data models.
//!
//! Every navigation in the admin panel produces a [`PageData`] built from the
//! root layout's [`LayoutData`] and, inside the authenticated area, the
//! guard's [`AuthenticatedLayoutData`]. Field names are camelCase because the
//! panel consumes them verbatim.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Output of the root layout: a display title and a fixed
/// `isAuthenticated: false` default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    pub page_title: String,
    pub is_authenticated: bool,
}

impl LayoutData {
    pub fn new(page_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
            is_authenticated: false,
        }
    }
}

/// Output of the authenticated-area guard once the access-token cookie is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedLayoutData {
    pub is_authenticated: bool,
}

impl AuthenticatedLayoutData {
    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }
}

/// Data handed to a page after all layouts on its path have run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub page_title: String,
    pub is_authenticated: bool,
}

impl PageData {
    /// Nested layout fields override the root layout's.
    pub fn merge(root: LayoutData, nested: Option<&AuthenticatedLayoutData>) -> Self {
        let is_authenticated = nested
            .map(|data| data.is_authenticated)
            .unwrap_or(root.is_authenticated);

        Self {
            page_title: root.page_title,
            is_authenticated,
        }
    }
}

impl From<LayoutData> for PageData {
    fn from(root: LayoutData) -> Self {
        Self::merge(root, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layout_data_defaults_to_unauthenticated() {
        let data = LayoutData::new("Login");
        assert_eq!(data.page_title, "Login");
        assert!(!data.is_authenticated);
    }

    #[test]
    fn test_merge_without_nested_keeps_root() {
        let page = PageData::merge(LayoutData::new("Login"), None);
        assert_eq!(page.page_title, "Login");
        assert!(!page.is_authenticated);
    }

    #[test]
    fn test_merge_nested_overrides_flag() {
        let nested = AuthenticatedLayoutData::authenticated();
        let page = PageData::merge(LayoutData::new("Dashboard"), Some(&nested));
        assert_eq!(page.page_title, "Dashboard");
        assert!(page.is_authenticated);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(LayoutData::new("Place Management")).unwrap();
        assert_eq!(
            value,
            json!({ "pageTitle": "Place Management", "isAuthenticated": false })
        );

        let value = serde_json::to_value(AuthenticatedLayoutData::authenticated()).unwrap();
        assert_eq!(value, json!({ "isAuthenticated": true }));
    }
}
