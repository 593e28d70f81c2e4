//! Role layouts: header, page title, routed content, bottom navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both `/admin` and `/volunteer` parent routes render this layout around an
//! `<Outlet/>`. Title and navigation are derived purely from the current path.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::bottom_nav::BottomNav;
use crate::components::header::Header;

/// Which role area a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    Admin,
    Volunteer,
}

impl LayoutKind {
    pub fn root(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Volunteer => "/volunteer",
        }
    }
}

fn under(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

pub fn layout_kind(path: &str) -> Option<LayoutKind> {
    if under(path, "/admin") {
        Some(LayoutKind::Admin)
    } else if under(path, "/volunteer") {
        Some(LayoutKind::Volunteer)
    } else {
        None
    }
}

/// Header title for `path`; empty outside the role areas.
pub fn layout_title(path: &str) -> &'static str {
    const ADMIN: [(&str, &str); 5] = [
        ("/admin/events/create", "Create Event"),
        ("/admin/events/edit", "Edit Event"),
        ("/admin/events", "Events"),
        ("/admin/assign-volunteers", "Assign Volunteers"),
        ("/admin/emergency", "Emergency"),
    ];
    const VOLUNTEER: [(&str, &str); 3] = [
        ("/volunteer/events", "Events"),
        ("/volunteer/profile", "Profile"),
        ("/volunteer/guide", "First Aid Guide"),
    ];

    match layout_kind(path) {
        Some(kind) if path == kind.root() => "Dashboard",
        Some(LayoutKind::Admin) => ADMIN.iter().find(|(p, _)| under(path, p)).map_or("", |(_, t)| t),
        Some(LayoutKind::Volunteer) => VOLUNTEER.iter().find(|(p, _)| under(path, p)).map_or("", |(_, t)| t),
        None => "",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn nav_items(kind: LayoutKind) -> [NavItem; 4] {
    match kind {
        LayoutKind::Admin => [
            NavItem { label: "DASHBOARD", href: "/admin" },
            NavItem { label: "EVENTS", href: "/admin/events" },
            NavItem { label: "ASSIGN", href: "/admin/assign-volunteers" },
            NavItem { label: "EMERGENCY", href: "/admin/emergency" },
        ],
        LayoutKind::Volunteer => [
            NavItem { label: "HOME", href: "/volunteer" },
            NavItem { label: "EVENTS", href: "/volunteer/events" },
            NavItem { label: "GUIDE", href: "/volunteer/guide" },
            NavItem { label: "PROFILE", href: "/volunteer/profile" },
        ],
    }
}

/// Whether `item` should be highlighted for `path`. Role roots only match exactly.
pub fn nav_active(item: NavItem, path: &str) -> bool {
    if layout_kind(item.href).is_some_and(|kind| kind.root() == item.href) {
        path == item.href
    } else {
        under(path, item.href)
    }
}

/// Label and destination of the header's role toggle.
pub fn role_toggle(path: &str) -> (&'static str, &'static str) {
    if layout_kind(path) == Some(LayoutKind::Admin) {
        ("Go to Volunteer", "/volunteer")
    } else {
        ("Go to Admin", "/admin")
    }
}

#[component]
pub fn AppLayout(kind: LayoutKind) -> impl IntoView {
    let location = use_location();
    let title = Memo::new(move |_| layout_title(&location.pathname.get()));

    view! {
        <div class="app-layout">
            <Header title=title/>
            <main class="app-layout__content">
                <Outlet/>
            </main>
            <BottomNav kind=kind/>
        </div>
    }
}
