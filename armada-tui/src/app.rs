//! Key loop and status line for the menu console.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use armada_menu::{MenuTarget, action_label_transform};
use trellis::{TreeNode, TreeState, TreeTheme, render_forest};

use crate::screen::Screen;

pub struct App {
    forest: Vec<TreeNode<MenuTarget>>,
    state: TreeState,
    theme: TreeTheme,
    status: String,
    scroll: usize,
}

impl App {
    pub fn new(forest: Vec<TreeNode<MenuTarget>>) -> Self {
        // open the top-level sections on startup
        let expanded: Vec<String> = forest
            .iter()
            .filter(|node| node.has_children())
            .map(|node| node.id.clone())
            .collect();

        Self {
            forest,
            state: TreeState::new().with_expanded(expanded),
            theme: TreeTheme::new().label_transform(action_label_transform),
            status: String::from(
                "↑/↓ move · →/← expand/collapse · enter open · space select · q quit",
            ),
            scroll: 0,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        let mut screen = Screen::new()?;
        let _ = self.state.cursor_first(&self.forest);

        loop {
            let rows =
                render_forest(&self.forest, &self.state, &self.theme).map_err(io::Error::other)?;
            let (width, height) = screen.size()?;
            let viewport = height.saturating_sub(1) as usize;
            self.scroll_to_cursor(viewport, rows.len());
            let end = (self.scroll + viewport).min(rows.len());
            let visible = &rows[self.scroll.min(end)..end];
            screen.draw(visible, &self.status, width, height)?;

            match screen.next_event()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Up => {
                let _ = self.state.cursor_up(&self.forest);
            }
            KeyCode::Down => {
                let _ = self.state.cursor_down(&self.forest);
            }
            KeyCode::Home => {
                let _ = self.state.cursor_first(&self.forest);
            }
            KeyCode::End => {
                let _ = self.state.cursor_last(&self.forest);
            }
            KeyCode::Right => self.expand_or_descend(),
            KeyCode::Left => self.collapse_or_ascend(),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') => self.select(),
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(change) = self.state.select_all(&self.forest) {
                    self.status = format!("{} entries selected", change.selected.len());
                }
            }
            KeyCode::Esc => {
                if self.state.deselect_all().is_some() {
                    self.status = String::from("selection cleared");
                }
            }
            _ => {}
        }
        false
    }

    /// Right: expand a collapsed row, otherwise step into the first child.
    fn expand_or_descend(&mut self) {
        let Some(id) = self.state.cursor_id(&self.forest) else {
            return;
        };
        let has_children =
            trellis::find(&self.forest, &id).is_some_and(|node| node.has_children());
        if has_children && !self.state.is_expanded(&id) {
            if let Some(change) = self.state.expand(&self.forest, &id) {
                log::debug!("expanded {}", change.node.id);
                self.status = format!("expanded {}", change.node.label);
            }
        } else {
            let _ = self.state.cursor_to_first_child(&self.forest);
        }
    }

    /// Left: collapse an expanded row, otherwise step back to the parent.
    fn collapse_or_ascend(&mut self) {
        let Some(id) = self.state.cursor_id(&self.forest) else {
            return;
        };
        if self.state.is_expanded(&id) {
            if let Some(change) = self.state.collapse(&self.forest, &id) {
                log::debug!("collapsed {}", change.node.id);
                self.status = format!("collapsed {}", change.node.label);
            }
        } else {
            let _ = self.state.cursor_to_parent(&self.forest);
        }
    }

    /// Enter: open the route behind a leaf, toggle a section.
    fn activate(&mut self) {
        let Some(id) = self.state.cursor_id(&self.forest) else {
            return;
        };
        let target = trellis::find(&self.forest, &id).and_then(|node| node.payload.clone());
        if let Some(target) = target {
            let route = target.route.as_deref().unwrap_or("-");
            self.status = match &target.action {
                Some(action) => format!("open {route} ({action})"),
                None => format!("open {route}"),
            };
            log::info!("activate {id}: {}", self.status);
        } else if let Some(change) = self.state.toggle(&self.forest, &id) {
            self.status = format!(
                "{} {}",
                if change.expanded { "expanded" } else { "collapsed" },
                change.node.label
            );
        }
    }

    fn select(&mut self) {
        let Some(id) = self.state.cursor_id(&self.forest) else {
            return;
        };
        if let Some(change) = self.state.select(&self.forest, &id) {
            log::debug!("selection now {:?}", change.selected);
            self.status = format!("selected [{}]", change.selected.join(", "));
        }
    }

    fn scroll_to_cursor(&mut self, viewport: usize, total: usize) {
        if let Some(cursor) = self.state.cursor() {
            if cursor < self.scroll {
                self.scroll = cursor;
            } else if viewport > 0 && cursor >= self.scroll + viewport {
                self.scroll = cursor + 1 - viewport;
            }
        }
        self.scroll = self.scroll.min(total.saturating_sub(viewport));
    }
}
