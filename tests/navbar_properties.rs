use unilink::{
    default_nav_items, highlight, HistoryRouter, NavTarget, NavbarAction, NavbarCoordinator,
    Overlay, Router, Session, SessionStore, ThemeMode,
};

/// Router that records every navigation request.
struct RecordingRouter {
    path: String,
    navigations: Vec<String>,
}

impl RecordingRouter {
    fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            navigations: Vec::new(),
        }
    }
}

impl Router for RecordingRouter {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
        self.path = path.to_string();
    }
}

fn signed_in_store(id: &str) -> SessionStore {
    let mut store = SessionStore::new();
    store.sign_in(Session::new(id, "Ada", "Lovelace"));
    store
}

#[test]
fn test_route_items_navigate_once_without_local_change() {
    let items = default_nav_items();
    for (index, item) in items.iter().enumerate() {
        let NavTarget::Route(destination) = &item.target else {
            continue;
        };
        let mut coordinator = NavbarCoordinator::default();
        let mut store = SessionStore::new();
        let mut router = RecordingRouter::at("/elsewhere");
        let before = *coordinator.overlays();

        coordinator.dispatch(NavbarAction::SelectNavItem(index), &mut store, &mut router);

        assert_eq!(router.navigations, vec![destination.clone()]);
        assert_eq!(*coordinator.overlays(), before);
    }
}

#[test]
fn test_messaging_opens_chat_without_navigation() {
    let items = default_nav_items();
    let messaging = items.iter().position(|i| i.label == "Messaging").unwrap();
    let mut coordinator = NavbarCoordinator::new(items);
    let mut store = SessionStore::new();
    let mut router = RecordingRouter::at("/home");

    coordinator.dispatch(NavbarAction::SelectNavItem(messaging), &mut store, &mut router);

    assert!(coordinator.is_open(Overlay::Chat));
    assert!(router.navigations.is_empty());
}

#[test]
fn test_toggle_mode_is_an_involution() {
    let mut coordinator = NavbarCoordinator::default();
    let mut router = RecordingRouter::at("/home");
    for start in [ThemeMode::Light, ThemeMode::Dark] {
        let mut store = SessionStore::new();
        if start == ThemeMode::Dark {
            store.toggle_mode();
        }
        coordinator.dispatch(NavbarAction::ToggleTheme, &mut store, &mut router);
        assert_ne!(store.mode(), start);
        coordinator.dispatch(NavbarAction::ToggleTheme, &mut store, &mut router);
        assert_eq!(store.mode(), start);
    }
}

#[test]
fn test_sign_out_from_any_state() {
    let setups: Vec<Vec<NavbarAction>> = vec![
        vec![],
        vec![NavbarAction::ToggleProfileMenu],
        vec![NavbarAction::ToggleProfileMenu, NavbarAction::OpenSearch, NavbarAction::OpenChat],
        vec![NavbarAction::ToggleMobileMenu],
    ];

    for signed_in in [true, false] {
        for setup in &setups {
            let mut coordinator = NavbarCoordinator::default();
            let mut store = if signed_in { signed_in_store("u1") } else { SessionStore::new() };
            let mut router = RecordingRouter::at("/home");
            for action in setup {
                coordinator.dispatch(*action, &mut store, &mut router);
            }

            coordinator.dispatch(NavbarAction::SignOut, &mut store, &mut router);

            assert!(store.user().is_none());
            assert!(!coordinator.is_open(Overlay::ProfileMenu));
            assert!(router.navigations.is_empty());
        }
    }
}

#[test]
fn test_repeated_sign_out_is_harmless() {
    let mut coordinator = NavbarCoordinator::default();
    let mut store = signed_in_store("u1");
    let mut router = RecordingRouter::at("/home");
    coordinator.dispatch(NavbarAction::SignOut, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::SignOut, &mut store, &mut router);
    assert!(store.user().is_none());
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn test_overlays_are_not_mutually_exclusive() {
    let mut coordinator = NavbarCoordinator::default();
    let mut store = signed_in_store("u1");
    let mut router = RecordingRouter::at("/home");

    coordinator.dispatch(NavbarAction::ToggleProfileMenu, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::OpenChat, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::OpenSearch, &mut store, &mut router);

    assert!(coordinator.is_open(Overlay::Search));
    assert!(coordinator.is_open(Overlay::Chat));
    assert!(coordinator.is_open(Overlay::ProfileMenu));

    coordinator.dispatch(NavbarAction::ToggleMobileMenu, &mut store, &mut router);
    assert_eq!(coordinator.overlays().open_overlays().len(), 4);
}

#[test]
fn test_network_item_is_the_only_active_one() {
    let items = default_nav_items();
    let active = highlight(&items, "/home/alumniPage");
    assert_eq!(active.len(), 1);
    let index = *active.iter().next().unwrap();
    assert_eq!(items[index].label, "My Network");

    let coordinator = NavbarCoordinator::new(items);
    let router = HistoryRouter::new("/home/alumniPage");
    assert_eq!(coordinator.active_items(&router), active);
}

#[test]
fn test_view_profile_navigates_and_closes_menu() {
    let mut coordinator = NavbarCoordinator::default();
    let mut store = signed_in_store("u1");
    let mut router = RecordingRouter::at("/home");

    coordinator.dispatch(NavbarAction::ToggleProfileMenu, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::ViewProfile, &mut store, &mut router);

    assert_eq!(router.navigations, vec!["/profile/u1".to_string()]);
    assert!(!coordinator.is_open(Overlay::ProfileMenu));
}

#[test]
fn test_view_profile_without_session_stays_put() {
    let mut coordinator = NavbarCoordinator::default();
    let mut store = SessionStore::new();
    let mut router = RecordingRouter::at("/home");

    coordinator.dispatch(NavbarAction::ToggleProfileMenu, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::ViewProfile, &mut store, &mut router);

    assert!(router.navigations.is_empty());
    assert!(!coordinator.is_open(Overlay::ProfileMenu));
}

#[test]
fn test_search_chat_theme_sign_out_scenario() {
    let mut coordinator = NavbarCoordinator::default();
    let mut store = SessionStore::new();
    let mut router = HistoryRouter::new("/home");

    assert!(coordinator.overlays().open_overlays().is_empty());
    assert_eq!(store.mode(), ThemeMode::Light);
    assert!(store.user().is_none());

    coordinator.dispatch(NavbarAction::OpenSearch, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::SelectNavItem(2), &mut store, &mut router);
    coordinator.dispatch(NavbarAction::ToggleTheme, &mut store, &mut router);
    coordinator.dispatch(NavbarAction::SignOut, &mut store, &mut router);

    assert!(coordinator.is_open(Overlay::Search));
    assert!(coordinator.is_open(Overlay::Chat));
    assert!(!coordinator.is_open(Overlay::ProfileMenu));
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert!(store.user().is_none());
    assert_eq!(router.current_path(), "/home");
}
