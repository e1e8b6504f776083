//! Access gate and menu visibility tests.

use crate::directory::domain::Role;
use crate::session::domain::{MENU, Section, can_access, visible_menu};
use rstest::rstest;

#[rstest]
fn executor_cannot_access_admin_only_entries() {
    assert!(!can_access(Role::Executor, &[Role::Admin]));
}

#[rstest]
fn admin_can_access_entries_open_to_all() {
    assert!(can_access(
        Role::Admin,
        &[Role::Admin, Role::Manager, Role::Executor]
    ));
}

#[rstest]
fn menu_order_is_fixed() {
    let sections: Vec<Section> = MENU.iter().map(|entry| entry.section()).collect();
    assert_eq!(
        sections,
        [
            Section::Dashboard,
            Section::Requests,
            Section::Objects,
            Section::Tasks,
            Section::Users,
            Section::Reports,
            Section::Settings
        ]
    );
}

#[rstest]
fn admin_sees_every_section() {
    let visible: Vec<Section> = visible_menu(Role::Admin)
        .iter()
        .map(|entry| entry.section())
        .collect();
    assert_eq!(visible.len(), MENU.len());
}

#[rstest]
fn manager_sees_everything_except_users() {
    let visible: Vec<Section> = visible_menu(Role::Manager)
        .iter()
        .map(|entry| entry.section())
        .collect();
    assert_eq!(
        visible,
        [
            Section::Dashboard,
            Section::Requests,
            Section::Objects,
            Section::Tasks,
            Section::Reports,
            Section::Settings
        ]
    );
}

#[rstest]
fn executor_sees_only_field_sections() {
    let visible: Vec<Section> = visible_menu(Role::Executor)
        .iter()
        .map(|entry| entry.section())
        .collect();
    assert_eq!(
        visible,
        [
            Section::Dashboard,
            Section::Requests,
            Section::Tasks,
            Section::Settings
        ]
    );
}

#[rstest]
fn section_tokens_round_trip() {
    for entry in &MENU {
        let section = entry.section();
        assert_eq!(Section::try_from(section.as_str()), Ok(section));
    }
    assert!(Section::try_from("billing").is_err());
}
