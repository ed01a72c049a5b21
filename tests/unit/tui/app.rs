use super::*;
use crate::core::event::Modifiers;
use crate::field::{FieldOptions, Mode};
use crate::services::FieldSettings;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// 40x10 terminal: fields sit inside the border at rows 1, 3, 5, 7. The longest name is
// "rotation", so values start at column 1 + 8 + 2.
const VALUE_X: u16 = 11;

fn settings(threshold: f64) -> Settings {
    Settings {
        drag: FieldOptions {
            drag_threshold: threshold,
            ..FieldOptions::default()
        },
        ..Settings::default()
    }
}

fn draw(app: &mut DemoApp, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|frame| app.render(frame)).unwrap();
}

fn setup(threshold: f64) -> (DemoApp, Terminal<TestBackend>) {
    let mut app = DemoApp::new(&settings(threshold));
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    draw(&mut app, &mut terminal);
    (app, terminal)
}

fn mouse(kind: MouseKind, column: u16, row: u16) -> TerminalEvent {
    mouse_with(kind, column, row, Modifiers::NONE)
}

fn mouse_with(kind: MouseKind, column: u16, row: u16, modifiers: Modifiers) -> TerminalEvent {
    TerminalEvent::Mouse(MouseInput {
        kind,
        column,
        row,
        modifiers,
    })
}

fn key(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::simple(code))
}

fn field(app: &DemoApp, index: usize) -> &crate::field::NumericField<TerminalFieldView> {
    let id = app.fields().ids()[index];
    app.fields().get(id).unwrap()
}

#[test]
fn fields_start_as_labels_with_hit_areas() {
    let (app, _terminal) = setup(1.0);
    assert_eq!(app.fields().len(), 4);

    let width = field(&app, 0);
    assert_eq!(width.mode(), Mode::Label);
    assert_eq!(width.view().label(), "320");
    assert!(width.view().label_hit(Pos::new(f64::from(VALUE_X), 1.0)));
    assert!(width.view().label_hit(Pos::new(f64::from(VALUE_X + 2), 1.0)));
    assert!(!width.view().label_hit(Pos::new(f64::from(VALUE_X + 3), 1.0)));
    assert!(!width.view().input_hit(Pos::new(f64::from(VALUE_X), 1.0)));
    assert!(field(&app, 3).view().label_hit(Pos::new(f64::from(VALUE_X), 7.0)));
}

#[test]
fn click_edit_and_commit_with_enter() {
    let (mut app, mut terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 1));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 1));
    draw(&mut app, &mut terminal);

    let width = field(&app, 0);
    assert_eq!(width.mode(), Mode::Edit);
    assert!(width.view().is_focused());
    assert!(width.view().input_hit(Pos::new(f64::from(VALUE_X), 1.0)));
    assert_eq!(app.listeners().global_count(), 0);

    for _ in 0..3 {
        app.handle_input(&key(KeyCode::Backspace));
    }
    app.handle_input(&key(KeyCode::Char('4')));
    app.handle_input(&key(KeyCode::Char('2')));
    app.handle_input(&key(KeyCode::Enter));

    let width = field(&app, 0);
    assert_eq!(width.mode(), Mode::Label);
    assert_eq!(width.value(), 42.0);
    assert_eq!(width.view().label(), "42");
    assert!(!width.view().is_focused());
}

#[test]
fn escape_and_outside_click_commit_the_edit() {
    let (mut app, mut terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 3));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 3));
    draw(&mut app, &mut terminal);
    app.handle_input(&key(KeyCode::Char('5')));
    app.handle_input(&key(KeyCode::Esc));
    assert_eq!(field(&app, 1).value(), 2405.0);
    assert_eq!(field(&app, 1).mode(), Mode::Label);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 5));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 5));
    draw(&mut app, &mut terminal);
    app.handle_input(&key(KeyCode::Char('1')));
    app.handle_input(&mouse(MouseKind::Down, 30, 8));
    app.handle_input(&mouse(MouseKind::Up, 30, 8));

    assert_eq!(field(&app, 2).value(), 0.51);
    assert_eq!(field(&app, 2).mode(), Mode::Label);
}

#[test]
fn dragging_up_increments_and_shift_scales() {
    let (mut app, mut terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 3));
    app.handle_input(&mouse(MouseKind::Drag, VALUE_X, 2));
    draw(&mut app, &mut terminal);
    assert!(field(&app, 1).is_dragging());
    assert_eq!(field(&app, 1).value(), 241.0);

    app.handle_input(&mouse_with(MouseKind::Drag, VALUE_X, 1, Modifiers::SHIFT));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 1));

    let height = field(&app, 1);
    assert_eq!(height.value(), 251.0);
    assert_eq!(height.mode(), Mode::Label);
    assert!(!height.is_dragging());
    assert_eq!(app.listeners().global_count(), 0);
}

#[test]
fn horizontal_drag_uses_the_x_axis() {
    let (mut app, _terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 7));
    app.handle_input(&mouse(MouseKind::Drag, VALUE_X - 2, 7));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X - 2, 7));

    assert_eq!(field(&app, 3).value(), -46.0);
}

#[test]
fn focus_loss_cancels_a_drag() {
    let (mut app, _terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 1));
    assert_eq!(app.listeners().global_count(), 2);

    app.handle_input(&TerminalEvent::FocusLost);
    assert_eq!(app.listeners().global_count(), 0);
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 1));
    assert_eq!(field(&app, 0).mode(), Mode::Label);
}

#[test]
fn clicks_outside_labels_are_ignored() {
    let (mut app, _terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, 2, 1));
    app.handle_input(&mouse(MouseKind::Up, 2, 1));

    assert_eq!(app.listeners().global_count(), 0);
    assert!(app.fields().iter().all(|f| f.mode() == Mode::Label));
}

#[test]
fn q_quits_only_when_no_input_is_focused() {
    let (mut app, mut terminal) = setup(1.0);

    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 1));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 1));
    draw(&mut app, &mut terminal);
    app.handle_input(&key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(field(&app, 0).view().buffer(), "320q");

    app.handle_input(&key(KeyCode::Tab));
    app.handle_input(&key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_while_editing() {
    let (mut app, _terminal) = setup(1.0);
    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 1));
    app.handle_input(&mouse(MouseKind::Up, VALUE_X, 1));

    app.handle_input(&TerminalEvent::Key(KeyEvent::new(
        KeyCode::Char('c'),
        Modifiers::CTRL,
    )));
    assert!(app.should_quit());
}

#[test]
fn status_line_shows_the_latest_log_line() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut app = DemoApp::new(&Settings {
        fields: vec![FieldSettings::new("n", "1")],
        ..Settings::default()
    })
    .with_log_rx(rx);

    tx.send("first".to_string()).unwrap();
    tx.send("second".to_string()).unwrap();
    app.drain_logs();
    assert_eq!(app.status(), "second");
}

#[test]
fn parse_warnings_show_up_in_the_status_bar() {
    use tracing_subscriber::layer::SubscriberExt;

    let (writer, rx) = crate::tui::status::channel();
    let subscriber =
        tracing_subscriber::registry().with(crate::tui::status::status_layer(writer));
    let (mut app, mut terminal) = setup(1.0);
    app = app.with_log_rx(rx);

    tracing::subscriber::with_default(subscriber, || {
        app.handle_input(&mouse(MouseKind::Down, VALUE_X, 1));
        app.handle_input(&mouse(MouseKind::Up, VALUE_X, 1));
        draw(&mut app, &mut terminal);
        for _ in 0..3 {
            app.handle_input(&key(KeyCode::Backspace));
        }
        app.handle_input(&key(KeyCode::Char('x')));
        app.handle_input(&key(KeyCode::Esc));
    });
    app.drain_logs();

    assert!(field(&app, 0).value().is_nan());
    assert_eq!(field(&app, 0).view().label(), "NaN");
    assert!(app.status().starts_with("WARN"));
    assert!(app.status().contains("input is not a number"));
}

#[test]
fn shutdown_mid_drag_hands_back_plain_inputs() {
    let (mut app, _terminal) = setup(1.0);
    app.handle_input(&mouse(MouseKind::Down, VALUE_X, 1));
    app.handle_input(&mouse(MouseKind::Drag, VALUE_X, 0));

    let views = app.shutdown();
    let names: Vec<&str> = views.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["width", "height", "opacity", "rotation"]);
    assert_eq!(views[0].buffer(), "321");
    assert!(views.iter().all(|v| v.is_input_shown() && !v.is_label_shown()));
}
