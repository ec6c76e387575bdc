use std::fmt;

use crate::content::project_by_id;

use super::location::Location;

pub const WORK_DETAIL_PREFIX: &str = "/work/";
pub const FALLBACK_PROJECT_NAME: &str = "Project";
pub const FALLBACK_PAGE_NAME: &str = "Page";

/// Display label for a location, shown in the navbar and transition overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageName(&'static str);

impl PageName {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Never fails: unknown project ids and unmapped paths resolve to generic labels.
pub fn resolve_page_name(location: &Location) -> PageName {
    match location.as_str() {
        "/" => return PageName("Home"),
        "/about" => return PageName("About"),
        "/work" => return PageName("Work"),
        _ => {}
    }

    if let Some(id) = location.as_str().strip_prefix(WORK_DETAIL_PREFIX) {
        return match project_by_id(id) {
            Some(project) => PageName(project.title),
            None => PageName(FALLBACK_PROJECT_NAME),
        };
    }

    PageName(FALLBACK_PAGE_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Work,
    Project(String),
    NotFound,
}

impl Route {
    pub fn parse(location: &Location) -> Self {
        match location.as_str() {
            "/" => Self::Home,
            "/about" => Self::About,
            "/work" => Self::Work,
            path => match path.strip_prefix(WORK_DETAIL_PREFIX) {
                Some(id) if !id.contains('/') => Self::Project(id.to_string()),
                _ => Self::NotFound,
            },
        }
    }

    /// Top-level routes reachable from the navbar, in display order.
    pub fn top_level() -> [(Self, &'static str); 3] {
        [(Self::Home, "/"), (Self::Work, "/work"), (Self::About, "/about")]
    }
}
