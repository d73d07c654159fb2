use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::path::PathBuf;

use streakgrid::calendar::{today_local, GridComposer, StreakCalculator};
use streakgrid::config::AppConfig;
use streakgrid::models::{CalendarGrid, TimePeriod, VisitSet, VisitStats};
use streakgrid::store::load_visits;

use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{calendar, header, statusbar, streak};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,
    pub period: TimePeriod,
    pub visits_path: PathBuf,
    pub visits: VisitSet,
    /// Set by `--today`; disables date rollover.
    pub pinned_today: Option<NaiveDate>,
    pub status: Option<String>,

    // Derived from visits + today on every refresh
    pub today: NaiveDate,
    pub stats: VisitStats,
    pub grid: CalendarGrid,
}

impl App {
    pub fn new(
        config: AppConfig,
        visits_path: PathBuf,
        visits: VisitSet,
        pinned_today: Option<NaiveDate>,
    ) -> Self {
        let today = pinned_today.unwrap_or_else(today_local);
        let period = config.display.default_period;
        let stats = StreakCalculator::new(&visits, today).stats();
        let grid = GridComposer::new(&visits, today).compose(period);

        App {
            view: View::Dashboard,
            config,
            should_quit: false,
            period,
            visits_path,
            visits,
            pinned_today,
            status: None,
            today,
            stats,
            grid,
        }
    }

    /// Recompute stats and grid against a single reference date.
    pub fn refresh_at(&mut self, today: NaiveDate) {
        self.today = today;
        self.stats = StreakCalculator::new(&self.visits, today).stats();
        self.grid = GridComposer::new(&self.visits, today).compose(self.period);
        log::debug!(
            "Refreshed {} view at {}: {:?}",
            self.period.as_str(),
            today,
            self.stats
        );
    }

    pub fn tick(&mut self) {
        if self.pinned_today.is_some() {
            return;
        }
        let today = today_local();
        if today != self.today {
            log::info!("Date rolled over to {}", today);
            self.refresh_at(today);
        }
    }

    pub fn set_period(&mut self, period: TimePeriod) {
        if self.period != period {
            self.period = period;
            self.refresh_at(self.today);
        }
    }

    pub fn reload(&mut self) {
        match load_visits(&self.visits_path) {
            Ok(visits) => {
                self.visits = visits;
                self.status = Some(format!("Loaded {} visits", self.visits.len()));
                let today = self.pinned_today.unwrap_or_else(today_local);
                self.refresh_at(today);
            }
            Err(e) => {
                log::warn!("Reload failed: {:#}", e);
                self.status = Some(format!("✗ {:#}", e));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status = None;
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('w') => self.set_period(TimePeriod::Week),
            KeyCode::Char('m') => self.set_period(TimePeriod::Month),
            KeyCode::Char('y') => self.set_period(TimePeriod::Year),
            KeyCode::Tab => self.set_period(self.period.next()),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => self.view = View::Dashboard,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer[0],
            self.today,
            self.period,
            self.pinned_today.is_some(),
        );
        statusbar::render(frame, outer[2], self.status.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(outer[1]);

        streak::render(frame, columns[0], &self.stats, &self.grid);
        calendar::render(frame, columns[1], &self.grid, self.config.display.show_future);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(12).min(area.height),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [w]          ", "Week view"),
            ("  [m]          ", "Month view"),
            ("  [y]          ", "Year view"),
            ("  [Tab]        ", "Cycle views"),
            ("  [r]          ", "Reload visit file"),
            ("  [?]          ", "Toggle help"),
            ("  [q] / Esc    ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, desc) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::accent()),
                Span::styled(desc, theme::dim()),
            ]));
        }
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            format!("  {}", self.visits_path.display()),
            theme::dim(),
        )));

        let block = Block::default()
            .title(Span::styled(" Help ", theme::accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::accent())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the dashboard event loop.
pub fn run(
    config: AppConfig,
    visits_path: PathBuf,
    visits: VisitSet,
    pinned_today: Option<NaiveDate>,
) -> Result<()> {
    let tick_rate = config.display.tick_rate_ms;
    let mut app = App::new(config, visits_path, visits, pinned_today);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(),
            }
        }
    })();

    ratatui::restore();
    result
}
