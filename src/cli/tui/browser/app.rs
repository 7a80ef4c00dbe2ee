use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use tokio::time;

use crate::catalog::data::PATTERNS;
use crate::Result;

use super::clipboard::ClipboardSink;
use super::events::AppEvent;
use super::highlight::Highlighter;
use super::screens;
use super::state::{BrowserState, Tab};
use super::theme::Theme;

/// Main application struct
pub struct App {
    state: BrowserState,
    should_quit: bool,
    theme: Theme,
    highlighter: Highlighter,
    clipboard: ClipboardSink,
    /// Last time Ctrl+C was pressed, for double-press exit
    last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: BrowserState::new(PATTERNS),
            should_quit: false,
            theme: Theme::default(),
            highlighter: Highlighter::new(),
            clipboard: ClipboardSink::new(),
            last_ctrl_c: None,
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with a timeout so the toast expires on time
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header bar
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        screens::chrome::render_header(frame, chunks[0], &self.state, &self.theme);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
            .split(chunks[1]);

        screens::list::render(frame, body[0], &self.state, &self.theme);
        screens::detail::render(frame, body[1], &self.state, &self.theme, &self.highlighter);

        screens::chrome::render_help(frame, chunks[2], &self.state, &self.theme);
        screens::chrome::render_toast(frame, &self.state, &self.theme);
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key.code, key.modifiers),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => self.state.tick(Instant::now()),
        }
    }

    fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: ratatui::crossterm::event::KeyModifiers,
    ) {
        use ratatui::crossterm::event::KeyModifiers;

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                // Exit on double Ctrl+C within one second
                let now = Instant::now();
                if let Some(last) = self.last_ctrl_c {
                    if now.duration_since(last).as_millis() < 1000 {
                        self.should_quit = true;
                        return;
                    }
                }
                self.last_ctrl_c = Some(now);
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.move_cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_cursor_up(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.state.set_active_tab(self.state.active_tab.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.state.set_active_tab(self.state.active_tab.prev());
            }
            KeyCode::Char('1') => self.state.set_active_tab(Tab::About),
            KeyCode::Char('2') => self.state.set_active_tab(Tab::Dotnet),
            KeyCode::Char('3') => self.state.set_active_tab(Tab::React),
            KeyCode::Char('e') => self.state.toggle_language(),
            KeyCode::Char(']') => self.state.focus_next_example(),
            KeyCode::Char('[') => self.state.focus_prev_example(),
            KeyCode::PageDown => self.state.scroll_down(10),
            KeyCode::PageUp => self.state.scroll_up(10),
            KeyCode::Char('c') => self.copy_focused_example(),
            _ => {}
        }
    }

    /// Copy the focused code block. On success the confirmation toast is
    /// armed; on failure nothing is shown (the sink already logged it).
    fn copy_focused_example(&mut self) {
        let Some(example) = self.state.focused_example() else {
            return;
        };
        if self.clipboard.copy(example.code) {
            self.state.mark_copied(Instant::now());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
