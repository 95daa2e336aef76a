mod args;
mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use mbox_lexer_config::{Config, Theme};
use mbox_lexer_engine::{CharSource, MboxLexer, Style, snapshot};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use render::Palette;
use std::{
    env,
    io::{Stdout, stdout},
    path::Path,
    process,
};
use xi_rope::Rope;

struct App {
    title: String,
    rope: Rope,
    palette: Palette,
    lexer: MboxLexer,
    line_count: usize,
    top_line: usize,
    /// Text rows visible in the last drawn frame.
    page_height: usize,
}

impl App {
    fn new(path: &Path, rope: Rope, palette: Palette) -> Self {
        let line_count = CharSource::line_of_offset(&rope, rope.len()) + 1;
        Self {
            title: path.display().to_string(),
            rope,
            palette,
            lexer: MboxLexer::new(),
            line_count,
            top_line: 0,
            page_height: 1,
        }
    }

    fn max_top_line(&self) -> usize {
        self.line_count.saturating_sub(self.page_height)
    }

    fn scroll_down(&mut self, lines: usize) {
        self.top_line = (self.top_line + lines).min(self.max_top_line());
    }

    fn scroll_up(&mut self, lines: usize) {
        self.top_line = self.top_line.saturating_sub(lines);
    }

    fn scroll_to_top(&mut self) {
        self.top_line = 0;
    }

    fn scroll_to_bottom(&mut self) {
        self.top_line = self.max_top_line();
    }

    /// Lexes just the visible lines and returns them styled.
    fn visible_lines(&self) -> Vec<Line<'static>> {
        let first = self.top_line;
        let last = (first + self.page_height).min(self.line_count);
        let start = CharSource::offset_of_line(&self.rope, first);
        let end = CharSource::offset_of_line(&self.rope, last);

        let pass = self.lexer.lex(&self.rope, start, end - start, Style::Default);
        render::styled_lines(&self.rope, &pass, first..last, &self.palette)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let program = env::args().next().unwrap_or_else(|| "mbox-lexer-cli".into());
    let args = match args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} [mbox-file] [--dump]");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            warn!("{e}; using the default theme");
            Config::default()
        }
    };

    let Some(path) = args.file.or(config.archive) else {
        eprintln!("Error: No mbox file provided and no archive configured");
        eprintln!("Usage: {program} [mbox-file] [--dump]");
        eprintln!(
            "Or set `archive` in a config file at {}",
            Config::config_path().display()
        );
        process::exit(1);
    };

    let rope = read_archive(&path)?;

    if args.dump {
        let pass = MboxLexer::new().lex_all(&rope);
        print!("{}", snapshot::normalize(&rope, &pass));
        return Ok(());
    }

    view(&path, rope, &config.theme)
}

fn read_archive(path: &Path) -> Result<Rope> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(Rope::from(String::from_utf8_lossy(&bytes).as_ref()))
}

fn view(path: &Path, rope: Rope, theme: &Theme) -> Result<()> {
    let mut app = App::new(path, rope, render::palette(theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(app.page_height),
                KeyCode::PageUp => app.scroll_up(app.page_height),
                KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
                KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows
    app.page_height = usize::from(chunks[0].height.saturating_sub(2)).max(1);
    app.top_line = app.top_line.min(app.max_top_line());

    let title = format!(
        " {} [{}-{}/{}] ",
        app.title,
        app.top_line + 1,
        (app.top_line + app.page_height).min(app.line_count),
        app.line_count
    );
    let content = Paragraph::new(app.visible_lines())
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("q", Color::Yellow),
        Span::raw(": Quit | "),
        Span::styled("j/k", Color::Yellow),
        Span::raw(": Scroll | "),
        Span::styled("PgUp/PgDn", Color::Yellow),
        Span::raw(": Page | "),
        Span::styled("g/G", Color::Yellow),
        Span::raw(": Top/Bottom"),
    ]));
    f.render_widget(help, chunks[1]);
}
