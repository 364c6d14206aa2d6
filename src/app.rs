//! Application state, event handling, and rendering.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Cell, Clear, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    TableState, Wrap,
};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::debug;

use crate::content::{self, MarkdownStore, Portfolio};
use crate::event::{Event, EventHandler};
use crate::model::{ProjectId, View};
use crate::router::{Effect, Router};
use crate::theme::Theme;

/// Return value from event handling.
#[derive(Debug, PartialEq)]
pub enum Action {
    Continue,
    Quit,
}

/// Input mode for modal states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Core application state.
pub struct App {
    // Content (immutable after startup)
    pub portfolio: Arc<Portfolio>,
    pub store: Arc<MarkdownStore>,

    // Navigation
    pub router: Router,
    initial_fragment: String,

    // Detail content slot + staleness guard
    pub detail_content: String,
    pub detail_generation: u64,

    // UI state
    pub table_state: TableState,
    pub mode: InputMode,
    pub body_scroll: u16,
    pub body_total_lines: u16,
    pub theme: Theme,
    pub clock: String,
    pub status_message: Option<(String, Instant)>,

    // Layout areas for mouse hit-testing
    pub list_area: Rect,
    pub body_area: Rect,

    // Channel back into the event loop, set once `run` starts
    tx: Option<mpsc::UnboundedSender<Event>>,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        store: MarkdownStore,
        initial_fragment: String,
        theme: Theme,
    ) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            store: Arc::new(store),
            router: Router::new(initial_fragment.clone()),
            initial_fragment,
            detail_content: String::new(),
            detail_generation: 0,
            table_state: TableState::default(),
            mode: InputMode::Normal,
            body_scroll: 0,
            body_total_lines: 0,
            theme,
            clock: chrono::Local::now().format("%H:%M:%S").to_string(),
            status_message: None,
            list_area: Rect::default(),
            body_area: Rect::default(),
            tx: None,
        }
    }

    /// Cold-start initialization: resolve the launch fragment, replacing
    /// the initial history entry.
    pub fn initialize(&mut self) {
        let fragment = self.initial_fragment.clone();
        let portfolio = self.portfolio.clone();
        let effects = self.router.initialize_from_fragment(&fragment, &portfolio);
        self.execute_effects(effects);
        self.ensure_list_selection();
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
    ) -> color_eyre::Result<()> {
        let mut events = EventHandler::new();
        self.tx = Some(events.sender());
        self.initialize();

        loop {
            // RENDER
            terminal.draw(|frame| self.render(frame))?;

            // WAIT FOR EVENT
            let Some(event) = events.next().await else {
                break;
            };

            // UPDATE
            match self.handle_event(event) {
                Action::Quit => break,
                Action::Continue => {}
            }
        }

        Ok(())
    }

    /// Handle a single event.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Tick => {
                self.clock = chrono::Local::now().format("%H:%M:%S").to_string();
                // Auto-dismiss transient messages after 5 seconds
                if let Some((_, when)) = &self.status_message {
                    if when.elapsed().as_secs() >= 5 {
                        self.status_message = None;
                    }
                }
                Action::Continue
            }
            Event::ContentLoaded { generation, text } => {
                if generation == self.detail_generation {
                    self.detail_content = text;
                    self.body_total_lines = 0;
                } else {
                    debug!(generation, current = self.detail_generation, "discarding stale detail load");
                }
                Action::Continue
            }
            Event::Resize(_, _) => Action::Continue,
        }
    }

    /// Handle key events.
    fn handle_key_event(&mut self, key: KeyEvent) -> Action {
        // Global keys
        match key.code {
            KeyCode::Char('q') if self.mode == InputMode::Normal => return Action::Quit,
            KeyCode::Char('?') => {
                self.mode = if self.mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
                return Action::Continue;
            }
            _ => {}
        }

        // Help mode: any key dismisses
        if self.mode == InputMode::Help {
            self.mode = InputMode::Normal;
            return Action::Continue;
        }

        match key.code {
            // Nav bar: number keys map to the top-level views
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as u8 - b'1') as usize;
                self.navigate_to(View::NAV_ORDER[idx]);
            }
            KeyCode::Tab => self.navigate_to(self.next_nav_view(1)),
            KeyCode::BackTab => self.navigate_to(self.next_nav_view(-1)),

            // History
            KeyCode::Left | KeyCode::Backspace => self.go_back(),
            KeyCode::Right => self.go_forward(),
            KeyCode::Esc if self.router.view() == View::ProjectDetail => self.go_back(),

            // List navigation / body scrolling
            KeyCode::Down | KeyCode::Char('j') => {
                if self.router.view() == View::Projects {
                    self.select_next_row();
                } else {
                    self.scroll_body(1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.router.view() == View::Projects {
                    self.select_previous_row();
                } else {
                    self.scroll_body(-1);
                }
            }
            KeyCode::Home if self.router.view() == View::Projects => {
                self.table_state.select(Some(0));
            }
            KeyCode::End if self.router.view() == View::Projects => {
                let len = self.portfolio.projects().len();
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
            }
            KeyCode::Char('d') => self.scroll_body(5),
            KeyCode::Char('u') => self.scroll_body(-5),

            // Open the project under the cursor
            KeyCode::Enter if self.router.view() == View::Projects => {
                if let Some(id) = self.cursor_project_id() {
                    self.open_project(id);
                }
            }

            KeyCode::Char('t') => {
                self.theme = self.theme.next();
            }
            _ => {}
        }

        Action::Continue
    }

    /// Handle mouse events.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                // Click on a registry row opens that project
                if self.router.view() == View::Projects
                    && self.list_area.contains((mouse.column, mouse.row).into())
                {
                    // Border (1) + header row (1) + header bottom margin (1)
                    let row_offset = mouse.row.saturating_sub(self.list_area.y + 3);
                    let index = (row_offset / 2) as usize; // each row is height 2
                    if index < self.portfolio.projects().len() {
                        self.table_state.select(Some(index));
                        if let Some(id) = self.cursor_project_id() {
                            self.open_project(id);
                        }
                    }
                }
            }
            MouseEventKind::ScrollDown => {
                if self.body_area.contains((mouse.column, mouse.row).into()) {
                    self.scroll_body(3);
                } else if self.list_area.contains((mouse.column, mouse.row).into()) {
                    self.select_next_row();
                }
            }
            MouseEventKind::ScrollUp => {
                if self.body_area.contains((mouse.column, mouse.row).into()) {
                    self.scroll_body(-3);
                } else if self.list_area.contains((mouse.column, mouse.row).into()) {
                    self.select_previous_row();
                }
            }
            _ => {}
        }
        Action::Continue
    }

    // ─────────────────────────────────────────────────────────
    // Navigation plumbing
    // ─────────────────────────────────────────────────────────

    fn navigate_to(&mut self, view: View) {
        let portfolio = self.portfolio.clone();
        let effects = self.router.navigate_to(view, &portfolio);
        self.body_scroll = 0;
        self.execute_effects(effects);
        self.ensure_list_selection();
    }

    fn open_project(&mut self, id: ProjectId) {
        let portfolio = self.portfolio.clone();
        let effects = self.router.select_project(id, &portfolio);
        self.execute_effects(effects);
    }

    fn go_back(&mut self) {
        let portfolio = self.portfolio.clone();
        match self.router.history_back(&portfolio) {
            Some(effects) => {
                self.body_scroll = 0;
                self.execute_effects(effects);
                self.ensure_list_selection();
            }
            None => self.set_status("Already at the oldest entry"),
        }
    }

    fn go_forward(&mut self) {
        let portfolio = self.portfolio.clone();
        match self.router.history_forward(&portfolio) {
            Some(effects) => {
                self.body_scroll = 0;
                self.execute_effects(effects);
                self.ensure_list_selection();
            }
            None => self.set_status("Already at the newest entry"),
        }
    }

    /// Apply router effects. History effects never reach this point — the
    /// router absorbs them into its stack.
    fn execute_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScrollToTop => self.body_scroll = 0,
                Effect::LoadDetail(id) => self.begin_detail_load(id),
                Effect::PushHistory(_) | Effect::ReplaceHistory(_) => {}
            }
        }
    }

    /// Clear the detail slot and spawn the async load, tagged with a fresh
    /// generation so a stale completion can never overwrite a newer one.
    fn begin_detail_load(&mut self, id: ProjectId) {
        self.detail_generation = self.detail_generation.wrapping_add(1);
        self.detail_content.clear();
        self.body_scroll = 0;

        let Some(project) = self.portfolio.project(&id).cloned() else {
            return;
        };
        let Some(tx) = self.tx.clone() else {
            // No event loop attached (tests drive loads manually).
            return;
        };
        let store = self.store.clone();
        let generation = self.detail_generation;
        tokio::spawn(async move {
            let text = content::resolve_detail(&project, &store).await;
            let _ = tx.send(Event::ContentLoaded { generation, text });
        });
    }

    fn set_status(&mut self, message: &str) {
        self.status_message = Some((message.to_string(), Instant::now()));
    }

    fn next_nav_view(&self, step: isize) -> View {
        let order = View::NAV_ORDER;
        let current = match self.router.view() {
            // Detail belongs to the registry tab
            View::ProjectDetail => View::Projects,
            view => view,
        };
        let pos = order.iter().position(|v| *v == current).unwrap_or(0) as isize;
        let next = (pos + step).rem_euclid(order.len() as isize) as usize;
        order[next]
    }

    fn cursor_project_id(&self) -> Option<ProjectId> {
        let index = self.table_state.selected()?;
        self.portfolio.projects().get(index).map(|p| p.id.clone())
    }

    fn ensure_list_selection(&mut self) {
        let len = self.portfolio.projects().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        // Keep the cursor on the routed project when returning to a detail
        // view, otherwise make sure something is selected.
        if let Some(id) = self.router.selected_project() {
            if let Some(pos) = self.portfolio.projects().iter().position(|p| &p.id == id) {
                self.table_state.select(Some(pos));
                return;
            }
        }
        match self.table_state.selected() {
            Some(i) if i < len => {}
            _ => self.table_state.select(Some(0)),
        }
    }

    fn select_next_row(&mut self) {
        let len = self.portfolio.projects().len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map(|s| (s + 1).min(len - 1))
            .unwrap_or(0);
        self.table_state.select(Some(i));
    }

    fn select_previous_row(&mut self) {
        if self.portfolio.projects().is_empty() {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map(|s| s.saturating_sub(1))
            .unwrap_or(0);
        self.table_state.select(Some(i));
    }

    fn scroll_body(&mut self, delta: i16) {
        let max = self.body_total_lines.saturating_sub(5);
        self.body_scroll = if delta >= 0 {
            self.body_scroll.saturating_add(delta as u16).min(max)
        } else {
            self.body_scroll.saturating_sub(delta.unsigned_abs())
        };
    }

    // ─────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Graceful degradation for tiny terminals
        if area.width < 40 || area.height < 10 {
            let msg = Paragraph::new("Terminal too small. Resize to at least 80x24.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.error));
            frame.render_widget(msg, area);
            return;
        }

        let has_status = self.status_message.is_some();
        let constraints = if has_status {
            vec![
                Constraint::Length(1), // title bar
                Constraint::Length(2), // nav bar + fragment line
                Constraint::Length(1), // status message
                Constraint::Fill(1),   // main content
                Constraint::Length(1), // key hints
            ]
        } else {
            vec![
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(1),
            ]
        };

        let areas: Vec<Rect> = Layout::vertical(constraints).split(area).to_vec();
        let (title_area, nav_area, main_area, hints_area) = if has_status {
            (areas[0], areas[1], areas[3], areas[4])
        } else {
            (areas[0], areas[1], areas[2], areas[3])
        };

        self.render_title_bar(frame, title_area);
        self.render_nav_bar(frame, nav_area);
        if has_status {
            self.render_status_message(frame, areas[2]);
        }
        self.render_hints_bar(frame, hints_area);

        // Reset hit-test areas; the active view sets its own.
        self.list_area = Rect::default();
        self.body_area = Rect::default();

        match self.router.view() {
            View::Home => self.render_home(frame, main_area),
            View::Projects => self.render_projects(frame, main_area),
            View::Jobs => self.render_jobs(frame, main_area),
            View::Education => self.render_education(frame, main_area),
            View::Contact => self.render_contact(frame, main_area),
            View::ProjectDetail => self.render_project_detail(frame, main_area),
        }

        if self.mode == InputMode::Help {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let name = if self.portfolio.profile.name.is_empty() {
            "folio".to_string()
        } else {
            self.portfolio.profile.name.to_ascii_uppercase()
        };

        let history = format!(
            "{} {}",
            if self.router.can_go_back() { "‹" } else { " " },
            if self.router.can_go_forward() { "›" } else { " " },
        );

        let left = format!(" ◆ {name}  {}", self.portfolio.profile.headline);
        let right = format!("{history}  {} ", self.clock);
        let padding = (area.width as usize)
            .saturating_sub(left.chars().count() + right.chars().count());

        let title = Line::from(vec![
            Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::raw(right),
        ]);

        frame.render_widget(
            Paragraph::new(title).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn render_nav_bar(&self, frame: &mut Frame, area: Rect) {
        let [tabs_area, fragment_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        // The registry tab stays lit while a project detail is open.
        let active = match self.router.view() {
            View::ProjectDetail => View::Projects,
            view => view,
        };

        let mut spans = vec![Span::raw(" ")];
        for (i, view) in View::NAV_ORDER.iter().enumerate() {
            let label = format!("[{}] {}", i + 1, view.label());
            let style = if *view == active {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text_secondary)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), tabs_area);

        let fragment = Line::from(vec![
            Span::styled(" ⌘ ", Style::default().fg(self.theme.accent)),
            Span::styled(
                self.router.current_fragment().to_string(),
                Style::default().fg(self.theme.text_secondary),
            ),
        ]);
        frame.render_widget(Paragraph::new(fragment), fragment_area);
    }

    fn render_status_message(&self, frame: &mut Frame, area: Rect) {
        if let Some((ref msg, _)) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(self.theme.bar_bg).bg(self.theme.warning),
            ));
            frame.render_widget(
                Paragraph::new(line).style(Style::default().bg(self.theme.warning)),
                area,
            );
        }
    }

    fn render_hints_bar(&self, frame: &mut Frame, area: Rect) {
        let theme_name = self.theme.name;
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let hints = Line::from(vec![
            Span::styled(" 1-5", bold),
            Span::raw(" Views  "),
            Span::styled("↑↓", bold),
            Span::raw(" Browse  "),
            Span::styled("Enter", bold),
            Span::raw(" Open  "),
            Span::styled("←", bold),
            Span::raw(" Back  "),
            Span::styled("→", bold),
            Span::raw(" Forward  "),
            Span::styled("t", bold),
            Span::raw(" Theme  "),
            Span::styled("?", bold),
            Span::raw(" Help  "),
            Span::styled("q", bold),
            Span::raw(format!(" Quit  │ {theme_name}")),
        ]);

        frame.render_widget(
            Paragraph::new(hints).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn section_block(&self, title: &str) -> Block<'static> {
        Block::bordered()
            .border_style(Style::default().fg(self.theme.border))
            .title(format!(" {title} "))
    }

    fn render_home(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let profile = &self.portfolio.profile;

        let block = self.section_block(View::Home.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            profile.name.to_ascii_uppercase(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::styled(
            profile.headline.clone(),
            Style::default().fg(theme.text_secondary),
        ));
        lines.push(Line::raw(""));

        for paragraph in &profile.summary {
            lines.push(Line::raw(paragraph.clone()));
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} projects", self.portfolio.projects().len()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" · "),
            Span::styled(
                format!("{} roles", self.portfolio.experiences.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" · "),
            Span::styled(
                format!("{} certifications", self.portfolio.certifications.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Press 2 to browse the project registry.",
            Style::default().fg(theme.text_secondary),
        ));

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            inner,
        );
    }

    fn render_projects(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        self.list_area = area;

        let header = Row::new(vec!["Project", "Category", "Date", "Tags"])
            .style(
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .portfolio
            .projects()
            .iter()
            .map(|project| {
                let title = Line::from(Span::styled(
                    project.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                let subtitle = Line::from(Span::styled(
                    project.description.clone(),
                    Style::default().fg(theme.text_secondary),
                ));

                Row::new(vec![
                    Cell::from(Text::from(vec![title, subtitle])),
                    Cell::from(project.category.clone()),
                    Cell::from(project.date.clone()),
                    Cell::from(project.tags.join(", ")),
                ])
                .height(2)
            })
            .collect();

        let widths = [
            Constraint::Fill(2),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Fill(1),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(self.section_block(View::Projects.title()))
            .row_highlight_style(
                Style::default()
                    .bg(theme.accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_jobs(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let block = self.section_block(View::Jobs.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.body_area = inner;

        let mut lines: Vec<Line> = Vec::new();
        for exp in &self.portfolio.experiences {
            lines.push(Line::from(Span::styled(
                exp.role.to_ascii_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled(
                    exp.company.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" // {}", exp.location),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(
                    format!("  [{}]", exp.period),
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
            for bullet in &exp.description {
                lines.push(Line::from(vec![
                    Span::styled("  ▪ ", Style::default().fg(theme.accent)),
                    Span::raw(bullet.clone()),
                ]));
            }
            if !exp.images.is_empty() {
                lines.push(Line::styled(
                    format!("  ({} images in the full portfolio)", exp.images.len()),
                    Style::default().fg(theme.text_secondary),
                ));
            }
            lines.push(Line::raw(""));
        }

        self.render_scrollable(frame, inner, lines);
    }

    fn render_education(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let block = self.section_block(View::Education.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.body_area = inner;

        let heading = |text: &str| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let mut lines: Vec<Line> = Vec::new();

        lines.push(heading("━━ EDUCATION"));
        lines.push(Line::raw(""));
        for edu in &self.portfolio.education {
            lines.push(Line::from(Span::styled(
                edu.degree.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::raw(edu.institution.clone()),
                Span::styled(
                    format!("  [{}]", edu.period),
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
            if let Some(gpa) = &edu.gpa {
                lines.push(Line::styled(
                    format!("GPA: {gpa}"),
                    Style::default().fg(theme.text_secondary),
                ));
            }
            for achievement in &edu.achievements {
                lines.push(Line::from(vec![
                    Span::styled("  ▪ ", Style::default().fg(theme.accent)),
                    Span::raw(achievement.clone()),
                ]));
            }
            lines.push(Line::raw(""));
        }

        if !self.portfolio.certifications.is_empty() {
            lines.push(heading("━━ CERTIFICATIONS"));
            lines.push(Line::raw(""));
            for cert in &self.portfolio.certifications {
                lines.push(Line::from(vec![
                    Span::raw(cert.name.clone()),
                    Span::styled(
                        format!("  — {}", cert.date),
                        Style::default().fg(theme.text_secondary),
                    ),
                ]));
            }
            lines.push(Line::raw(""));
        }

        if !self.portfolio.skills.is_empty() {
            lines.push(heading("━━ TECHNICAL SKILLS"));
            lines.push(Line::raw(""));
            for skill in &self.portfolio.skills {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", skill.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(skill.description.clone()),
                ]));
            }
        }

        self.render_scrollable(frame, inner, lines);
    }

    fn render_contact(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let profile = &self.portfolio.profile;

        let block = self.section_block(View::Contact.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("Email: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                profile.email.clone(),
                Style::default().fg(theme.accent),
            ),
        ]));
        lines.push(Line::raw(""));
        for link in &profile.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", link.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    link.url.clone(),
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_project_detail(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let block = self.section_block(View::ProjectDetail.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.body_area = inner;

        let Some(project) = self
            .router
            .selected_project()
            .and_then(|id| self.portfolio.project(id))
        else {
            // Unreachable through the router, but never render garbage.
            let msg = Paragraph::new("No project selected")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_secondary));
            frame.render_widget(msg, inner);
            return;
        };

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", project.category.to_ascii_uppercase()),
                Style::default()
                    .bg(theme.accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ID: {}", project.id.as_str().to_ascii_uppercase()),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                format!("  DATE: {}", project.date),
                Style::default().fg(theme.text_secondary),
            ),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            project.title.to_ascii_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            project.description.clone(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::raw(""));

        if self.detail_content.is_empty() {
            lines.push(Line::styled(
                "Loading…",
                Style::default().fg(theme.text_secondary),
            ));
        } else {
            lines.extend(crate::markdown::markdown_lines(&self.detail_content, &theme));
        }

        if !project.tags.is_empty() {
            lines.push(Line::raw(""));
            let mut spans = vec![Span::styled(
                "TAGS  ",
                Style::default().fg(theme.text_secondary),
            )];
            for tag in &project.tags {
                spans.push(Span::styled(
                    format!("#{tag} "),
                    Style::default().fg(theme.accent),
                ));
            }
            lines.push(Line::from(spans));
        }

        self.render_scrollable(frame, inner, lines);
    }

    /// Shared body renderer: scrolled paragraph plus a scrollbar when the
    /// content overflows.
    fn render_scrollable(&mut self, frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let total_lines = lines.len() as u16;
        self.body_total_lines = total_lines;

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.body_scroll, 0));
        frame.render_widget(paragraph, area);

        if total_lines > area.height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state =
                ScrollbarState::new(total_lines as usize).position(self.body_scroll as usize);
            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 18, area);
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("  1-5        Jump to Home / Projects / Experience /"),
            Line::raw("             Education / Contact"),
            Line::raw("  Tab        Cycle views"),
            Line::raw("  ↑/k ↓/j    Browse the registry, scroll elsewhere"),
            Line::raw("  Enter      Open the selected project"),
            Line::raw("  ←/Bksp     History back"),
            Line::raw("  →          History forward"),
            Line::raw("  Esc        Leave the project detail view"),
            Line::raw("  d/u        Scroll body down/up"),
            Line::raw("  t          Cycle theme"),
            Line::raw("  ?          Toggle this help"),
            Line::raw("  q          Quit"),
            Line::raw(""),
            Line::styled(
                "Press any key to close",
                Style::default().fg(self.theme.text_secondary),
            ),
        ];

        let help = Paragraph::new(help_text).block(
            Block::bordered()
                .title(" Help ")
                .border_style(Style::default().fg(self.theme.accent))
                .style(Style::default().bg(self.theme.surface)),
        );

        frame.render_widget(help, popup_area);
    }
}

// ─────────────────────────────────────────────────────────
// Standalone helper functions
// ─────────────────────────────────────────────────────────

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
