use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gearwork_config::Config;
use gearwork_core::{ColorTheme, SpeedPreset, TimeFormat, format_clock};
use gearwork_render::ClockRenderer;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use tracing::{info, warn};

mod clock;
mod logging;

use clock::{SimClock, wall_clock_seconds};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "config unusable, using defaults");
        Config::default()
    });
    info!(?log_path, ?config, "starting");

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Simulated time driving the hands and gears.
    clock: SimClock,
    /// Draws the dial and the gear train.
    renderer: ClockRenderer,
    /// Current time format (12h or 24h).
    time_format: TimeFormat,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Dial is see-through.
    skeleton: bool,
    /// Transmission panel is visible.
    show_mechanism: bool,
    /// Info overlay is open.
    show_info: bool,
    /// Frame interval.
    tick_rate: Duration,
    /// Settings loaded at startup, updated with the user's toggles on quit.
    config: Config,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let start = config.start_seconds.unwrap_or_else(wall_clock_seconds);
        Ok(Self {
            running: false,
            clock: SimClock::new(start, config.speed),
            renderer: ClockRenderer::new()?,
            time_format: config.time_format,
            color_theme: config.color_theme,
            skeleton: config.skeleton,
            show_mechanism: config.show_mechanism,
            show_info: false,
            tick_rate: config.tick_rate(),
            config,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_frame = Instant::now();
        while self.running {
            let now = Instant::now();
            self.clock.tick(now - last_frame);
            last_frame = now;

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.save_config();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let color = self.color_theme.color();
        let t = self.clock.total_seconds();

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Fill(1),   // Dial and mechanism
            Constraint::Length(1), // Digital readout
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let title = Line::from(vec![
            "gear".bold().fg(color),
            "work".bold(),
            "  inside a mechanical clock".dark_gray(),
        ])
        .centered();
        frame.render_widget(title, chunks[0]);

        let panels = if self.show_mechanism {
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(chunks[1])
                .to_vec()
        } else {
            vec![chunks[1]]
        };

        let dial_title = if self.skeleton { " see-through " } else { " dial " };
        let dial_block = Block::bordered().title(dial_title).border_style(Style::new().fg(color));
        let dial_area = dial_block.inner(panels[0]);
        frame.render_widget(dial_block, panels[0]);
        self.renderer
            .render_face(frame, dial_area, t, self.skeleton, color);

        if let Some(&mech_area) = panels.get(1) {
            let block = Block::bordered()
                .title(" inside ")
                .border_style(Style::new().fg(Color::DarkGray));
            let inner = block.inner(mech_area);
            frame.render_widget(block, mech_area);
            self.renderer.render_mechanism(frame, inner, t, color);
        }

        let readout = Paragraph::new(format_clock(t, self.time_format))
            .style(Style::new().fg(color).bold())
            .alignment(Alignment::Center);
        frame.render_widget(readout, chunks[2]);

        frame.render_widget(self.status_line(color), chunks[3]);

        let help = Line::from(vec![
            "space".bold().fg(color),
            " play/pause  ".dark_gray(),
            "1/2/3".bold().fg(color),
            " speed  ".dark_gray(),
            "r".bold().fg(color),
            " reset  ".dark_gray(),
            "s".bold().fg(color),
            " see-through  ".dark_gray(),
            "m".bold().fg(color),
            " mechanism  ".dark_gray(),
            "t".bold().fg(color),
            " 12/24h  ".dark_gray(),
            "c".bold().fg(color),
            " color  ".dark_gray(),
            "i".bold().fg(color),
            " info  ".dark_gray(),
            "q".bold().fg(color),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[4]);

        if self.show_info {
            render_info(frame, color);
        }
    }

    /// Play state and speed presets, the active one highlighted.
    fn status_line(&self, color: Color) -> Line<'static> {
        let mut spans = vec![if self.clock.is_playing() {
            "▶ running".fg(Color::Green)
        } else {
            "⏸ paused".fg(Color::Yellow)
        }];
        spans.push("   ".into());
        for speed in SpeedPreset::ALL {
            let label = format!(" {} ", speed.label());
            spans.push(if speed == self.clock.speed() {
                Span::styled(label, Style::new().fg(Color::Black).bg(color).bold())
            } else {
                Span::styled(label, Style::new().fg(Color::DarkGray))
            });
        }
        if self.skeleton {
            spans.push("   now you can see how the hands connect to the gears".dark_gray());
        }
        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the hands keep moving between keys.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            self.quit();
            return;
        }
        // Any key closes the overlay
        if self.show_info {
            self.show_info = false;
            return;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char(' ') => self.clock.toggle_play(),
            KeyCode::Char('1') => self.clock.set_speed(SpeedPreset::RealTime),
            KeyCode::Char('2') => self.clock.set_speed(SpeedPreset::Minute),
            KeyCode::Char('3') => self.clock.set_speed(SpeedPreset::Hour),
            KeyCode::Char('r') => self.clock.reset(wall_clock_seconds()),
            KeyCode::Char('s') => self.skeleton = !self.skeleton,
            KeyCode::Char('m') => self.show_mechanism = !self.show_mechanism,
            KeyCode::Char('i') => self.show_info = true,
            KeyCode::Char('t') => self.time_format = self.time_format.toggle(),
            KeyCode::Char('c') => self.color_theme = self.color_theme.next(),
            _ => {}
        }
    }

    /// Persist the user's toggles for the next run.
    fn save_config(&mut self) {
        self.config.time_format = self.time_format;
        self.config.color_theme = self.color_theme;
        self.config.skeleton = self.skeleton;
        self.config.show_mechanism = self.show_mechanism;
        if let Err(e) = self.config.save() {
            warn!(error = %e, "could not save config");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Centered overlay explaining the gear train.
fn render_info(frame: &mut Frame, color: Color) {
    let area = centered(frame.area(), 60, 11);
    let text = vec![
        Line::from("Did you know?".bold().fg(color)),
        Line::from(""),
        Line::from(
            "Inside a clock, a chain of gears called a gear train links the fast \
             second hand to the slow hour hand.",
        ),
        Line::from(""),
        Line::from(vec![
            "The seconds gear turns ".into(),
            "60 times".bold(),
            " for every ".into(),
            "1 turn".bold(),
            " of the minutes gear, which turns 12 times per turn of the hours gear. \
             A small gear driving a big one slows the motion down."
                .into(),
        ]),
        Line::from(""),
        Line::from("press any key".dark_gray()).centered(),
    ];
    let popup = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" info ").border_style(Style::new().fg(color)));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Rect of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
