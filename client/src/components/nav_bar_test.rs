use super::*;

#[test]
fn nav_item_class_marks_active_item() {
    assert_eq!(nav_item_class(true), "nav-bar__item nav-bar__item--active");
    assert_eq!(nav_item_class(false), "nav-bar__item");
}

#[test]
fn section_label_uses_route_title() {
    assert_eq!(section_label(Some(AppRoute::Historial)), "Historial");
    assert_eq!(section_label(Some(AppRoute::Home)), "Inicio");
}

#[test]
fn section_label_is_empty_when_unmatched() {
    assert_eq!(section_label(resolve("/no-existe")), "");
}

#[test]
fn exactly_one_item_is_active_per_table_path() {
    for route in AppRoute::ALL {
        let current = resolve(route.path());
        let active = AppRoute::ALL
            .iter()
            .filter(|r| nav_item_class(current == Some(**r)).ends_with("--active"))
            .count();
        assert_eq!(active, 1, "{route:?}");
    }
}
