use ripe_browser::managers::tab_manager::{new_tab_id, TabManager, TabManagerTrait};
use ripe_browser::types::errors::TabError;

/// Views are opaque to the tab manager; a label is enough to track them.
fn manager_with(n: usize) -> (TabManager<&'static str>, Vec<String>) {
    const NAMES: [&str; 5] = ["v0", "v1", "v2", "v3", "v4"];
    let mut mgr = TabManager::new();
    let mut ids = Vec::new();
    for name in NAMES.iter().take(n) {
        let id = new_tab_id();
        mgr.create_tab(&id, *name, "https://example.com", false);
        ids.push(id);
    }
    (mgr, ids)
}

#[test]
fn test_new_tab_ids_are_unique() {
    assert_ne!(new_tab_id(), new_tab_id());
}

#[test]
fn test_create_tab_sets_active_when_first() {
    let (mgr, ids) = manager_with(1);
    assert_eq!(mgr.active_index(), Some(0));
    assert_eq!(mgr.get_active_tab().unwrap().id, ids[0]);
}

#[test]
fn test_create_tab_defaults() {
    let mut mgr: TabManager<()> = TabManager::new();
    let index = mgr.create_tab("t1", (), "https://github.com", true);
    let tab = mgr.get_tab(index).unwrap();
    assert_eq!(tab.id, "t1");
    assert_eq!(tab.url, "https://github.com");
    assert_eq!(tab.title, "New Tab");
}

#[test]
fn test_create_active_tab_takes_focus() {
    let (mut mgr, _) = manager_with(2);
    assert_eq!(mgr.active_index(), Some(0));
    mgr.create_tab("t", "v9", "about:blank", true);
    assert_eq!(mgr.active_index(), Some(2));
}

#[test]
fn test_remove_tab_returns_view() {
    let (mut mgr, ids) = manager_with(3);
    let (tab, view) = mgr.remove_tab(1).unwrap();
    assert_eq!(tab.id, ids[1]);
    assert_eq!(view, "v1");
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_remove_left_of_active_shifts_index() {
    let (mut mgr, ids) = manager_with(3);
    mgr.switch_tab(2).unwrap();
    mgr.remove_tab(0).unwrap();
    assert_eq!(mgr.active_index(), Some(1));
    assert_eq!(mgr.get_active_tab().unwrap().id, ids[2]);
}

#[test]
fn test_remove_right_of_active_keeps_index() {
    let (mut mgr, ids) = manager_with(3);
    mgr.remove_tab(2).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, ids[0]);
}

#[test]
fn test_remove_active_picks_right_then_left() {
    let (mut mgr, ids) = manager_with(3);
    mgr.switch_tab(1).unwrap();
    mgr.remove_tab(1).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, ids[2]);

    mgr.remove_tab(1).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, ids[0]);
}

#[test]
fn test_remove_every_tab_leaves_no_active() {
    let (mut mgr, _) = manager_with(1);
    mgr.remove_tab(0).unwrap();
    assert_eq!(mgr.tab_count(), 0);
    assert!(mgr.active_index().is_none());
}

#[test]
fn test_remove_invalid_index() {
    let (mut mgr, _) = manager_with(2);
    assert_eq!(mgr.remove_tab(2).err(), Some(TabError::InvalidIndex(2)));
}

#[test]
fn test_switch_tab_returns_previous() {
    let (mut mgr, _) = manager_with(3);
    assert_eq!(mgr.switch_tab(2).unwrap(), Some(0));
    assert_eq!(mgr.switch_tab(1).unwrap(), Some(2));
    assert!(mgr.switch_tab(3).is_err());
    assert_eq!(mgr.active_index(), Some(1));
}

#[test]
fn test_find_index_and_view_mut() {
    let (mut mgr, ids) = manager_with(3);
    assert_eq!(mgr.find_index(&ids[2]), Some(2));
    assert_eq!(mgr.find_index("missing"), None);
    *mgr.view_mut(2).unwrap() = "replaced";
    assert_eq!(mgr.view_mut(2).map(|v| *v), Some("replaced"));
    assert!(mgr.view_mut(3).is_none());
}

#[test]
fn test_views_mut_in_strip_order() {
    let (mut mgr, _) = manager_with(3);
    let views: Vec<&str> = mgr.views_mut().map(|v| *v).collect();
    assert_eq!(views, vec!["v0", "v1", "v2"]);
}

#[test]
fn test_update_tab_url_and_title() {
    let (mut mgr, ids) = manager_with(2);
    mgr.update_tab_url(&ids[1], "https://rust-lang.org").unwrap();
    mgr.update_tab_title(&ids[1], "  Rust  ").unwrap();
    let tab = mgr.get_tab(1).unwrap();
    assert_eq!(tab.url, "https://rust-lang.org");
    assert_eq!(tab.title, "Rust");

    mgr.update_tab_title(&ids[1], "   ").unwrap();
    assert_eq!(mgr.get_tab(1).unwrap().title, "New Tab");

    assert!(mgr.update_tab_url("nope", "x").is_err());
    assert!(mgr.update_tab_title("nope", "x").is_err());
}

#[test]
fn test_get_all_tabs_returns_ordered() {
    let (mgr, ids) = manager_with(3);
    let all: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
    assert_eq!(all, ids);
}
