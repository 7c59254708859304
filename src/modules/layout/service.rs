use iceapple_models::layout::{AuthenticatedLayoutData, LayoutData, PageData};

/// Title shown for any path the panel has no page for ("page not found").
pub const FALLBACK_PAGE_TITLE: &str = "없는 페이지";

/// Pages that sit behind the access-token guard.
pub const AUTHENTICATED_PAGES: [&str; 3] = ["/dashboard", "/place", "/projects"];

pub struct LayoutService;

impl LayoutService {
    /// Exact, case-sensitive lookup; `/dashboard/` and `/dashboard?x=1` are misses.
    pub fn resolve_page_title(path: &str) -> &'static str {
        match path {
            "/" => "Login",
            "/dashboard" => "Dashboard",
            "/place" => "Place Management",
            "/projects" => "Project Management",
            _ => FALLBACK_PAGE_TITLE,
        }
    }

    /// Root layout load hook. `is_authenticated` is always `false` here;
    /// the authenticated-area guard overrides it for nested pages.
    pub fn root_layout(path: &str) -> LayoutData {
        LayoutData::new(Self::resolve_page_title(path))
    }

    pub fn page_data(path: &str, nested: Option<&AuthenticatedLayoutData>) -> PageData {
        PageData::merge(Self::root_layout(path), nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_titles() {
        assert_eq!(LayoutService::resolve_page_title("/"), "Login");
        assert_eq!(LayoutService::resolve_page_title("/dashboard"), "Dashboard");
        assert_eq!(LayoutService::resolve_page_title("/place"), "Place Management");
        assert_eq!(
            LayoutService::resolve_page_title("/projects"),
            "Project Management"
        );
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        for path in ["/unknown", "", "/Dashboard", "/dashboard/", "/place/1", "//"] {
            assert_eq!(
                LayoutService::resolve_page_title(path),
                "없는 페이지",
                "path {path:?}"
            );
        }
    }

    #[test]
    fn test_root_layout_is_never_authenticated() {
        for path in ["/", "/dashboard", "/place", "/projects", "/unknown"] {
            assert!(!LayoutService::root_layout(path).is_authenticated);
        }
    }

    #[test]
    fn test_page_data_with_guard_is_authenticated() {
        let guard = AuthenticatedLayoutData::authenticated();
        for path in AUTHENTICATED_PAGES {
            let page = LayoutService::page_data(path, Some(&guard));
            assert!(page.is_authenticated);
            assert_ne!(page.page_title, FALLBACK_PAGE_TITLE);
        }
    }
}
