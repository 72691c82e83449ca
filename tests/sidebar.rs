use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use listerm::config::UiConfig;
use listerm::ui::components::dialogs::ListForm;
use listerm::ui::components::{SidebarComponent, SidebarHit, SidebarMode};
use listerm::ui::core::{Action, Component};
use listerm::{TodoList, User};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 30,
    height: 20,
};

fn list(id: &str, name: &str, description: &str) -> TodoList {
    TodoList {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tasks: Vec::new(),
    }
}

fn sidebar_with_lists() -> SidebarComponent {
    let user = User::new("u1", "Ana", "ana@example.com");
    let mut sidebar = SidebarComponent::new(user.clone(), &UiConfig::default());
    sidebar.update_data(
        user,
        vec![list("L1", "Casa", "tareas de casa"), list("L2", "Trabajo", "")],
        None,
    );
    sidebar
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(sidebar: &mut SidebarComponent, text: &str) {
    for c in text.chars() {
        sidebar.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_starts_closed_and_expanded() {
    let sidebar = sidebar_with_lists();
    assert_eq!(sidebar.mode(), &SidebarMode::Closed);
    assert!(!sidebar.is_collapsed());
    assert_eq!(sidebar.width(), 30);
}

#[test]
fn test_toggle_collapse() {
    let mut sidebar = sidebar_with_lists();
    sidebar.handle_key_events(key(KeyCode::Char('B')));
    assert!(sidebar.is_collapsed());
    assert_eq!(sidebar.width(), 7);

    sidebar.toggle_collapse();
    assert!(!sidebar.is_collapsed());
}

#[test]
fn test_create_emits_command_with_typed_values() {
    let mut sidebar = sidebar_with_lists();
    sidebar.handle_key_events(key(KeyCode::Char('A')));
    assert!(matches!(sidebar.mode(), SidebarMode::Creating(_)));

    type_text(&mut sidebar, "Compras");
    sidebar.handle_key_events(key(KeyCode::Tab));
    type_text(&mut sidebar, "semana");

    let action = sidebar.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::CreateList {
            user_id: "u1".to_string(),
            name: "Compras".to_string(),
            description: "semana".to_string(),
        }
    );
    // Stays open until the result arrives
    assert!(sidebar.is_dialog_open());

    sidebar.update(Action::ListCreated(list("L3", "Compras", "semana")));
    assert_eq!(sidebar.mode(), &SidebarMode::Closed);
}

#[test]
fn test_create_with_blank_name_does_nothing() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    type_text(&mut sidebar, "   ");

    assert_eq!(sidebar.confirm(), Action::None);
    assert!(matches!(sidebar.mode(), SidebarMode::Creating(_)));
}

#[test]
fn test_create_sends_untrimmed_name() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    type_text(&mut sidebar, " Viaje ");

    match sidebar.confirm() {
        Action::CreateList { name, .. } => assert_eq!(name, " Viaje "),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_create_failure_keeps_dialog_open() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    type_text(&mut sidebar, "Compras");
    sidebar.confirm();

    sidebar.update(Action::OperationFailed {
        operation: listerm::backend::BackendOperation::CreateList,
        error: "refused".to_string(),
    });
    assert_eq!(sidebar.form().map(|f| f.name.as_str()), Some("Compras"));
}

#[test]
fn test_edit_prefills_and_preserves_empty_fields() {
    let mut sidebar = sidebar_with_lists();
    sidebar.handle_key_events(key(KeyCode::Char('E')));
    assert_eq!(sidebar.form(), Some(&ListForm::new("Casa", "tareas de casa")));

    // Clear the name, keep the description
    for _ in 0.."Casa".len() {
        sidebar.handle_key_events(key(KeyCode::Backspace));
    }
    let action = sidebar.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::UpdateList(list("L1", "Casa", "tareas de casa")));
}

#[test]
fn test_edit_with_new_values() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_edit(1);
    type_text(&mut sidebar, " 2");
    sidebar.handle_key_events(key(KeyCode::Tab));
    type_text(&mut sidebar, "oficina");

    let action = sidebar.confirm();
    assert_eq!(action, Action::UpdateList(list("L2", "Trabajo 2", "oficina")));

    // A result for another list leaves the dialog alone
    sidebar.update(Action::ListUpdated(list("L1", "Casa", "")));
    assert!(sidebar.is_dialog_open());

    sidebar.update(Action::ListUpdated(list("L2", "Trabajo 2", "oficina")));
    assert_eq!(sidebar.mode(), &SidebarMode::Closed);
}

#[test]
fn test_escape_discards_draft() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    type_text(&mut sidebar, "borrador");
    sidebar.handle_key_events(key(KeyCode::Esc));
    assert_eq!(sidebar.mode(), &SidebarMode::Closed);

    sidebar.open_create();
    assert_eq!(sidebar.form(), Some(&ListForm::default()));
}

#[test]
fn test_only_one_dialog_at_a_time() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    sidebar.open_edit(0);
    assert!(matches!(sidebar.mode(), SidebarMode::Editing { list, .. } if list.id == "L1"));
}

#[test]
fn test_dialog_swallows_sidebar_keys() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    assert_eq!(sidebar.handle_key_events(key(KeyCode::Char('L'))), Action::None);
    assert_eq!(sidebar.form().map(|f| f.name.as_str()), Some("L"));
}

#[test]
fn test_delete_and_logout_keys() {
    let mut sidebar = sidebar_with_lists();
    assert_eq!(
        sidebar.handle_key_events(key(KeyCode::Char('D'))),
        Action::DeleteList("L1".to_string())
    );
    assert_eq!(sidebar.handle_key_events(key(KeyCode::Char('L'))), Action::Logout);
}

#[test]
fn test_cursor_moves_and_selects() {
    let mut sidebar = sidebar_with_lists();
    let action = sidebar.handle_key_events(key(KeyCode::Char('J')));
    assert_eq!(action, Action::SelectList(list("L2", "Trabajo", "")));
    assert_eq!(sidebar.cursor(), 1);

    let action = sidebar.handle_key_events(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT));
    assert_eq!(action, Action::SelectList(list("L1", "Casa", "tareas de casa")));

    // Plain arrows belong to the task list
    assert_eq!(sidebar.handle_key_events(key(KeyCode::Down)), Action::None);
}

#[test]
fn test_hit_test_rows() {
    let sidebar = sidebar_with_lists();
    assert_eq!(sidebar.hit_test(AREA, 5, 1), SidebarHit::Toggle);
    assert_eq!(sidebar.hit_test(AREA, 5, 2), SidebarHit::Nothing); // user row
    assert_eq!(sidebar.hit_test(AREA, 5, 3), SidebarHit::NewList);
    assert_eq!(sidebar.hit_test(AREA, 5, 4), SidebarHit::Select(0));
    assert_eq!(sidebar.hit_test(AREA, 5, 5), SidebarHit::Select(1));
    assert_eq!(sidebar.hit_test(AREA, 5, 6), SidebarHit::Nothing);
    assert_eq!(sidebar.hit_test(AREA, 5, 18), SidebarHit::Logout);
    assert_eq!(sidebar.hit_test(AREA, 0, 4), SidebarHit::Nothing); // border
}

#[test]
fn test_hit_test_action_icons() {
    let sidebar = sidebar_with_lists();
    // Inner width 28 starting at column 1: icons occupy columns 25..29
    assert_eq!(sidebar.hit_test(AREA, 24, 4), SidebarHit::Select(0));
    assert_eq!(sidebar.hit_test(AREA, 25, 4), SidebarHit::Edit(0));
    assert_eq!(sidebar.hit_test(AREA, 26, 4), SidebarHit::Edit(0));
    assert_eq!(sidebar.hit_test(AREA, 27, 5), SidebarHit::Delete(1));
    assert_eq!(sidebar.hit_test(AREA, 28, 5), SidebarHit::Delete(1));
}

#[test]
fn test_clicking_delete_icon_does_not_select() {
    let mut sidebar = sidebar_with_lists();
    let action = sidebar.handle_mouse(click(28, 5), AREA);
    assert_eq!(action, Action::DeleteList("L2".to_string()));
    assert_eq!(sidebar.cursor(), 0);
    assert!(sidebar.selected_list_id.is_none());
}

#[test]
fn test_clicking_edit_icon_opens_dialog_without_selecting() {
    let mut sidebar = sidebar_with_lists();
    let action = sidebar.handle_mouse(click(25, 5), AREA);
    assert_eq!(action, Action::None);
    assert!(matches!(sidebar.mode(), SidebarMode::Editing { list, .. } if list.id == "L2"));
    assert!(sidebar.selected_list_id.is_none());
}

#[test]
fn test_clicking_rows() {
    let mut sidebar = sidebar_with_lists();
    assert_eq!(
        sidebar.handle_mouse(click(5, 5), AREA),
        Action::SelectList(list("L2", "Trabajo", ""))
    );
    assert_eq!(sidebar.handle_mouse(click(5, 18), AREA), Action::Logout);

    sidebar.handle_mouse(click(5, 3), AREA);
    assert!(matches!(sidebar.mode(), SidebarMode::Creating(_)));

    // Clicks are ignored while a dialog is open
    assert_eq!(sidebar.handle_mouse(click(5, 1), AREA), Action::None);
    assert!(!sidebar.is_collapsed());
}

#[test]
fn test_collapsed_hides_lists() {
    let mut sidebar = sidebar_with_lists();
    sidebar.handle_mouse(click(3, 1), AREA);
    assert!(sidebar.is_collapsed());

    let area = Rect::new(0, 0, sidebar.width(), 20);
    assert_eq!(sidebar.hit_test(area, 3, 2), SidebarHit::NewList);
    assert_eq!(sidebar.hit_test(area, 3, 4), SidebarHit::Nothing);
    assert_eq!(sidebar.hit_test(area, 3, 18), SidebarHit::Logout);
}

#[test]
fn test_selection_follows_update_data() {
    let mut sidebar = sidebar_with_lists();
    let user = sidebar.user.clone();
    let lists = sidebar.todo_lists.clone();
    sidebar.update_data(user.clone(), lists, Some("L2".to_string()));
    assert_eq!(sidebar.cursor(), 1);

    // The list disappears: the cursor stays in range
    sidebar.update_data(user, vec![list("L1", "Casa", "")], None);
    assert_eq!(sidebar.cursor(), 0);
}

#[test]
fn test_select_returns_the_list_and_moves_cursor() {
    let mut sidebar = sidebar_with_lists();
    assert_eq!(sidebar.select(1), Action::SelectList(list("L2", "Trabajo", "")));
    assert_eq!(sidebar.cursor(), 1);
    assert_eq!(sidebar.select(5), Action::None);
    assert_eq!(sidebar.cursor(), 1);
}

#[test]
fn test_scrolling_while_collapsed_is_ignored() {
    let user = User::new("u1", "Ana", "ana@example.com");
    let ui = UiConfig {
        start_collapsed: true,
        ..UiConfig::default()
    };
    let mut sidebar = SidebarComponent::new(user.clone(), &ui);
    sidebar.update_data(
        user,
        vec![list("L1", "Casa", ""), list("L2", "Trabajo", ""), list("L3", "Viaje", "")],
        None,
    );

    let area = Rect::new(0, 0, sidebar.width(), 20);
    let mut terminal = Terminal::new(TestBackend::new(30, 20)).unwrap();
    terminal.draw(|f| sidebar.render(f, area)).unwrap();

    let scroll = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 2,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(sidebar.handle_mouse(scroll, area), Action::None);

    assert_eq!(
        sidebar.handle_key_events(key(KeyCode::Char('J'))),
        Action::SelectList(list("L2", "Trabajo", ""))
    );
    assert_eq!(sidebar.cursor(), 1);

    // Expanding shows the lists from the top
    sidebar.toggle_collapse();
    let area = Rect::new(0, 0, sidebar.width(), 20);
    assert_eq!(sidebar.hit_test(area, 5, 4), SidebarHit::Select(0));
}

#[test]
fn test_late_create_result_keeps_newer_draft() {
    let mut sidebar = sidebar_with_lists();
    sidebar.open_create();
    type_text(&mut sidebar, "Compras");
    sidebar.confirm();

    // Cancelled and started over before the first create landed
    sidebar.handle_key_events(key(KeyCode::Esc));
    sidebar.handle_key_events(key(KeyCode::Char('A')));
    type_text(&mut sidebar, "Viaje");

    sidebar.update(Action::ListCreated(list("L3", "Compras", "")));
    assert_eq!(sidebar.form().map(|f| f.name.as_str()), Some("Viaje"));

    sidebar.confirm();
    sidebar.update(Action::ListCreated(list("L4", "Viaje", "")));
    assert_eq!(sidebar.mode(), &SidebarMode::Closed);
}
