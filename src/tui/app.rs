//! Terminal host for a set of numeric fields.
//!
//! Routes terminal events the way a document would: presses hit-test labels, moves and
//! releases go to whoever holds a pointer capture, keys go to the focused input.

use std::io;
use std::sync::mpsc::Receiver;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use super::crossterm::{MouseInput, MouseKind, TerminalEvent};
use super::field_view::TerminalFieldView;
use crate::controller::DraggableNumbers;
use crate::core::event::{FieldEvent, KeyCode, KeyEvent};
use crate::core::geom::Pos;
use crate::field::{FieldId, FieldView, ListenerRegistry, Subscription};
use crate::services::{Settings, SettingsError};

const HELP: &str = "click: edit  drag: adjust  shift: x10  ctrl: x0.1  enter: commit  q: quit";
const INPUT_MIN_WIDTH: u16 = 12;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub struct DemoApp {
    fields: DraggableNumbers<TerminalFieldView>,
    listeners: ListenerRegistry,
    status: String,
    log_rx: Option<Receiver<String>>,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(settings: &Settings) -> Self {
        let mut listeners = ListenerRegistry::new();
        let views = settings
            .fields
            .iter()
            .map(|f| TerminalFieldView::new(f.name.clone(), f.value.clone()))
            .collect();
        let fields = DraggableNumbers::new(views, settings.drag, &mut listeners);

        Self {
            fields,
            listeners,
            status: String::new(),
            log_rx: None,
            should_quit: false,
        }
    }

    /// Log lines received here show up in the status bar.
    pub fn with_log_rx(mut self, rx: Receiver<String>) -> Self {
        self.log_rx = Some(rx);
        self
    }

    pub fn fields(&self) -> &DraggableNumbers<TerminalFieldView> {
        &self.fields
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn drain_logs(&mut self) {
        let Some(rx) = &self.log_rx else {
            return;
        };
        while let Ok(line) = rx.try_recv() {
            self.status = line;
        }
    }

    /// Tears every field down and hands the views back with their inputs showing.
    pub fn shutdown(self) -> Vec<TerminalFieldView> {
        let Self {
            fields,
            mut listeners,
            ..
        } = self;
        let views = fields.destroy_all(&mut listeners);
        if !listeners.is_empty() {
            tracing::warn!("subscriptions left behind after shutdown");
        }
        views
    }

    pub fn handle_input(&mut self, event: &TerminalEvent) {
        match event {
            TerminalEvent::Key(key) => self.on_key(key),
            TerminalEvent::Mouse(mouse) => self.on_mouse(mouse),
            TerminalEvent::FocusLost => self.fields.cancel_drags(&mut self.listeners),
            TerminalEvent::Resize(..) | TerminalEvent::Ignored => {}
        }
    }

    fn on_mouse(&mut self, mouse: &MouseInput) {
        let pointer = mouse.pointer();
        match mouse.kind {
            MouseKind::Down => {
                self.blur_unless_hit(pointer.pos);
                if let Some(id) = self.label_at(pointer.pos) {
                    if self.listeners.is_subscribed(id, Subscription::LabelPointerDown) {
                        self.fields
                            .dispatch(id, &FieldEvent::PointerDown(pointer), &mut self.listeners);
                    }
                }
            }
            MouseKind::Drag | MouseKind::Moved => {
                self.broadcast(Subscription::PointerMove, FieldEvent::PointerMove(pointer));
            }
            MouseKind::Up => {
                self.broadcast(Subscription::PointerUp, FieldEvent::PointerUp(pointer));
            }
            MouseKind::Other => {}
        }
    }

    fn on_key(&mut self, key: &KeyEvent) {
        let quit = key.modifiers.ctrl && key.code == KeyCode::Char('c');
        let Some(id) = self.focused_field() else {
            if quit || key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        };
        if quit {
            self.should_quit = true;
            return;
        }

        if self.listeners.is_subscribed(id, Subscription::InputKeyPress) {
            self.fields
                .dispatch(id, &FieldEvent::KeyPress(*key), &mut self.listeners);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.blur(id),
            _ => {
                if let Some(field) = self.fields.get_mut(id) {
                    if field.view().is_focused() {
                        field.view_mut().apply_key(key);
                    }
                }
            }
        }
    }

    fn broadcast(&mut self, kind: Subscription, event: FieldEvent) {
        for id in self.listeners.subscribers(kind) {
            self.fields.dispatch(id, &event, &mut self.listeners);
        }
    }

    fn focused_field(&self) -> Option<FieldId> {
        self.fields
            .iter()
            .find(|f| f.view().is_focused())
            .map(|f| f.id())
    }

    fn label_at(&self, pos: Pos) -> Option<FieldId> {
        self.fields
            .iter()
            .find(|f| f.view().label_hit(pos))
            .map(|f| f.id())
    }

    /// A press outside the focused input takes focus away from it.
    fn blur_unless_hit(&mut self, pos: Pos) {
        let Some(id) = self.focused_field() else {
            return;
        };
        let hit = self
            .fields
            .get(id)
            .is_some_and(|f| f.view().input_hit(pos));
        if !hit {
            self.blur(id);
        }
    }

    fn blur(&mut self, id: FieldId) {
        let Some(field) = self.fields.get_mut(id) else {
            return;
        };
        if !field.view().is_focused() {
            return;
        }
        field.view_mut().blur_input();
        if self.listeners.is_subscribed(id, Subscription::InputBlur) {
            self.fields.dispatch(id, &FieldEvent::Blur, &mut self.listeners);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let block = Block::bordered().title(" dragnum ");
        let inner = block.inner(main);
        frame.render_widget(block, main);
        self.render_fields(frame, inner);

        let line = Line::from(vec![
            Span::styled(HELP, Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::raw(self.status.as_str()),
        ]);
        frame.render_widget(Paragraph::new(line), status);
    }

    fn render_fields(&mut self, frame: &mut Frame, area: Rect) {
        let name_width = self
            .fields
            .iter()
            .map(|f| f.view().name().width())
            .max()
            .unwrap_or(0);
        let name_width = u16::try_from(name_width).unwrap_or(u16::MAX);
        let value_x = area.x.saturating_add(name_width).saturating_add(2);
        let ids = self.fields.ids().to_vec();

        for (row, id) in ids.into_iter().enumerate() {
            let Ok(offset) = u16::try_from(row * 2) else {
                break;
            };
            let y = area.y.saturating_add(offset);
            if y >= area.bottom() || value_x >= area.right() {
                break;
            }
            let Some(field) = self.fields.get_mut(id) else {
                continue;
            };
            let pressed = field.is_dragging();
            let dragged = field.drag_session().is_some_and(|d| d.is_dragged());
            let view = field.view_mut();
            let room = area.right() - value_x;

            frame.render_widget(
                Paragraph::new(view.name()).style(Style::default().fg(Color::Gray)),
                Rect::new(area.x, y, name_width.min(area.width), 1),
            );

            if view.is_label_shown() {
                let rect = Rect::new(value_x, y, view.label_width().max(1).min(room), 1);
                let style = Style::default().fg(Color::Cyan);
                let style = if dragged {
                    style.add_modifier(Modifier::REVERSED)
                } else if pressed {
                    style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    style.add_modifier(Modifier::UNDERLINED)
                };
                frame.render_widget(Paragraph::new(view.label()).style(style), rect);
                view.set_label_area(Some(rect));
            } else {
                view.set_label_area(None);
            }

            if view.is_input_shown() {
                let width = view
                    .buffer_width()
                    .saturating_add(1)
                    .max(INPUT_MIN_WIDTH)
                    .min(room);
                let rect = Rect::new(value_x, y, width, 1);
                frame.render_widget(
                    Paragraph::new(view.buffer())
                        .style(Style::default().fg(Color::White).bg(Color::DarkGray)),
                    rect,
                );
                if view.is_focused() {
                    let x = value_x
                        .saturating_add(view.cursor_column())
                        .min(rect.right().saturating_sub(1));
                    frame.set_cursor_position((x, y));
                }
                view.set_input_area(Some(rect));
            } else {
                view.set_input_area(None);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;
