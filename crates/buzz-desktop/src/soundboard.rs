use std::io;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use buzz_core::{Buzzer, Catalog, Player, StepKind};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{Level, LevelFilter, Metadata, Record};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const MAX_LOGS: usize = 200;

#[derive(Clone, Debug)]
pub struct LogEntry {
    level: Level,
    message: String,
}

// Extension trait for log::Level to provide UI rendering methods
trait LevelExt {
    fn color(&self) -> Color;
    fn prefix(&self) -> &str;
}

impl LevelExt for Level {
    fn color(&self) -> Color {
        match *self {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Cyan,
            Level::Debug => Color::Gray,
            Level::Trace => Color::DarkGray,
        }
    }

    fn prefix(&self) -> &str {
        match *self {
            Level::Error => "[ERROR]",
            Level::Warn => "[WARN] ",
            Level::Info => "[INFO] ",
            Level::Debug => "[DEBUG]",
            Level::Trace => "[TRACE]",
        }
    }
}

// Logger implementation that sends logs to the TUI
struct TuiLogger {
    tx: Sender<LogEntry>,
}

impl log::Log for TuiLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let entry = LogEntry {
            level: record.level(),
            message: format!("{}", record.args()),
        };
        // receiver is gone once the TUI has shut down
        let _ = self.tx.send(entry);
    }

    fn flush(&self) {}
}

/// Route `log` output into the soundboard's log panel.
pub fn install_logger(max_level: LevelFilter) -> Receiver<LogEntry> {
    let (tx, rx) = channel();
    if log::set_boxed_logger(Box::new(TuiLogger { tx })).is_ok() {
        log::set_max_level(max_level);
    }
    rx
}

struct SoundboardState {
    names: Vec<&'static str>,
    list: ListState,
    logs: Vec<LogEntry>,
    rx: Receiver<LogEntry>,
}

impl SoundboardState {
    fn new(catalog: &Catalog, rx: Receiver<LogEntry>) -> Self {
        let mut list = ListState::default();
        list.select(Some(0));
        Self {
            names: catalog.names().collect(),
            list,
            logs: Vec::new(),
            rx,
        }
    }

    fn collect_logs(&mut self) {
        while let Ok(entry) = self.rx.try_recv() {
            self.logs.push(entry);
            if self.logs.len() > MAX_LOGS {
                self.logs.remove(0);
            }
        }
    }

    fn selected_name(&self) -> Option<&'static str> {
        self.list.selected().and_then(|i| self.names.get(i).copied())
    }

    fn move_selection(&mut self, down: bool) {
        let Some(current) = self.list.selected() else {
            return;
        };
        let next = if down {
            (current + 1).min(self.names.len().saturating_sub(1))
        } else {
            current.saturating_sub(1)
        };
        self.list.select(Some(next));
    }
}

/// Run the soundboard until the user quits. Playback blocks the UI, like it
/// blocks the firmware's main loop.
pub fn run<B: Buzzer>(
    player: &mut Player<B>,
    catalog: &Catalog,
    rx: Receiver<LogEntry>,
) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = SoundboardState::new(catalog, rx);
    log::info!("Soundboard ready, {} cues", state.names.len());

    let result = event_loop(&mut terminal, &mut state, player, catalog);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Buzzer>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut SoundboardState,
    player: &mut Player<B>,
    catalog: &Catalog,
) -> Result<(), io::Error> {
    loop {
        state.collect_logs();
        terminal.draw(|f| ui(f, state, player, catalog))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
            KeyCode::Up | KeyCode::Char('k') => state.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => state.move_selection(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(name) = state.selected_name() {
                    if let Err(e) = player.play_named(catalog, name) {
                        log::error!("{}", e);
                    }
                }
            }
            KeyCode::Char('a') => {
                for name in &state.names {
                    if let Err(e) = player.play_named(catalog, name) {
                        log::error!("{}", e);
                    }
                }
            }
            KeyCode::Char('s') => player.stop(),
            _ => {}
        }
    }
}

fn ui<B: Buzzer>(f: &mut Frame, state: &mut SoundboardState, player: &Player<B>, catalog: &Catalog) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Cues
            Constraint::Length(10), // Logs
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let title = Paragraph::new("Buzzer Cue Soundboard")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    render_cue_list(f, columns[0], state);
    render_cue_steps(f, columns[1], state, catalog);
    render_history(f, columns[2], player);
    render_logs(f, rows[2], state);

    let help = Paragraph::new("↑/↓: Select cue | Enter/Space: Play | A: Play all | S: Stop | Q/ESC: Quit")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, rows[3]);
}

fn render_cue_list(f: &mut Frame, area: Rect, state: &mut SoundboardState) {
    let items: Vec<ListItem> = state.names.iter().map(|name| ListItem::new(*name)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Cues"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state.list);
}

fn render_cue_steps(f: &mut Frame, area: Rect, state: &SoundboardState, catalog: &Catalog) {
    let Some(name) = state.selected_name() else {
        return;
    };
    let Ok(cue) = catalog.lookup(name) else {
        return;
    };

    let title = format!(
        "{} ({} steps, {}ms)",
        name,
        cue.len(),
        cue.duration_ms()
    );

    let items: Vec<ListItem> = cue
        .steps()
        .iter()
        .map(|step| {
            let line = if step.is_silence() {
                Line::from(Span::styled(
                    format!("  rest {:>5}ms", step.duration_ms),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                let style = match step.kind {
                    StepKind::Held => Style::default().fg(Color::White),
                    StepKind::Glide => Style::default().fg(Color::Magenta),
                };
                Line::from(Span::styled(
                    format!("{:>6}Hz {:>5}ms {:?}", step.frequency_hz, step.duration_ms, step.kind),
                    style,
                ))
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_history<B: Buzzer>(f: &mut Frame, area: Rect, player: &Player<B>) {
    let history = player.history();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("History ({} played)", history.total()));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = history
        .recent(inner.height as usize)
        .map(|record| {
            let style = if record.report.faults > 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(Line::from(vec![
                Span::styled(record.name.as_str().to_string(), style),
                Span::raw(format!(
                    " {} tones {}ms",
                    record.report.emitted, record.report.waited_ms
                )),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}

fn render_logs(f: &mut Frame, area: Rect, state: &SoundboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Logs (scrolls automatically)");

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Show last N logs that fit in the area
    let max_logs = inner.height as usize;
    let start_idx = state.logs.len().saturating_sub(max_logs);

    let log_items: Vec<ListItem> = state.logs[start_idx..]
        .iter()
        .map(|log| {
            let content = Line::from(vec![
                Span::styled(log.level.prefix(), Style::default().fg(log.level.color())),
                Span::raw(" "),
                Span::raw(&log.message),
            ]);
            ListItem::new(content)
        })
        .collect();

    f.render_widget(List::new(log_items), inner);
}
