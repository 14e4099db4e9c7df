//! Navigation
//!
//! Route table and side-navigation state. The layout only needs to know
//! whether the current path is inside the assets section.

pub const HOME_PATH: &str = "/";
pub const ASSETS_PATH: &str = "/assets";
pub const AUDIT_LOG_PATH: &str = "/assets/audit-log";
pub const REPORTS_PATH: &str = "/assets/reports";

/// Side navigation: `open` is the mobile overlay, `collapsed` the desktop rail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
    pub collapsed: bool,
}

impl NavState {
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

pub fn is_assets_section(path: &str) -> bool {
    path.starts_with(ASSETS_PATH)
}

/// Whether a link to `target` is active at `path`.
///
/// `exact` links match only their own path (ignoring a trailing slash);
/// others also match nested paths.
pub fn is_active(path: &str, target: &str, exact: bool) -> bool {
    let path = normalize(path);
    let target = normalize(target);
    if exact || target == "/" {
        return path == target;
    }
    path == target || path.strip_prefix(target).is_some_and(|rest| rest.starts_with('/'))
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// CSS class for a nav link
pub fn link_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}
