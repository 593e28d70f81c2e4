use super::*;

// =============================================================
// layout_title
// =============================================================

#[test]
fn admin_titles() {
    assert_eq!(layout_title("/admin"), "Dashboard");
    assert_eq!(layout_title("/admin/events"), "Events");
    assert_eq!(layout_title("/admin/events/create"), "Create Event");
    assert_eq!(layout_title("/admin/events/edit/42"), "Edit Event");
    assert_eq!(layout_title("/admin/assign-volunteers"), "Assign Volunteers");
    assert_eq!(layout_title("/admin/emergency"), "Emergency");
}

#[test]
fn volunteer_titles() {
    assert_eq!(layout_title("/volunteer"), "Dashboard");
    assert_eq!(layout_title("/volunteer/events"), "Events");
    assert_eq!(layout_title("/volunteer/profile"), "Profile");
    assert_eq!(layout_title("/volunteer/guide"), "First Aid Guide");
}

#[test]
fn other_paths_have_no_title() {
    assert_eq!(layout_title("/"), "");
    assert_eq!(layout_title("/sign-in"), "");
    assert_eq!(layout_title("/administrator"), "");
    assert_eq!(layout_title("/admin/unknown"), "");
}

// =============================================================
// navigation
// =============================================================

#[test]
fn nav_items_per_role() {
    let admin = nav_items(LayoutKind::Admin).map(|i| i.label);
    assert_eq!(admin, ["DASHBOARD", "EVENTS", "ASSIGN", "EMERGENCY"]);
    let volunteer = nav_items(LayoutKind::Volunteer).map(|i| i.href);
    assert_eq!(volunteer, ["/volunteer", "/volunteer/events", "/volunteer/guide", "/volunteer/profile"]);
}

#[test]
fn root_nav_item_is_only_active_on_exact_path() {
    let [home, events, ..] = nav_items(LayoutKind::Admin);
    assert!(nav_active(home, "/admin"));
    assert!(!nav_active(home, "/admin/events"));
    assert!(nav_active(events, "/admin/events/edit/3"));
}

#[test]
fn role_toggle_points_at_other_area() {
    assert_eq!(role_toggle("/admin/events"), ("Go to Volunteer", "/volunteer"));
    assert_eq!(role_toggle("/volunteer"), ("Go to Admin", "/admin"));
}
