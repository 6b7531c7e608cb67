use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use drillbook_config::Config;
use drillbook_engine::{ExerciseFile, LoadError, Topic, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

mod markdown;
mod render;

use render::{
    NOTEBOOK_ERROR, RenderOptions, RenderedLine, Tone, render_content, render_topic_intro,
};

struct App {
    exercises_path: PathBuf,
    topics: Vec<Topic>,
    topic_index: usize,
    files: Vec<ExerciseFile>,
    file_list_state: ListState,
    options: RenderOptions,
    current_content: Vec<RenderedLine>,
    scroll: u16,
    status: Option<String>,
}

impl App {
    fn new(config: Config) -> Self {
        let mut app = Self {
            exercises_path: config.exercises_path,
            topics: config.topics,
            topic_index: 0,
            files: Vec::new(),
            file_list_state: ListState::default(),
            options: RenderOptions::default(),
            current_content: Vec::new(),
            scroll: 0,
            status: None,
        };
        app.load_topic();
        app
    }

    fn topic(&self) -> Option<&Topic> {
        self.topics.get(self.topic_index)
    }

    fn selected_file(&self) -> Option<&ExerciseFile> {
        self.file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
    }

    fn load_topic(&mut self) {
        self.files.clear();
        self.file_list_state.select(None);
        self.current_content.clear();
        self.scroll = 0;

        let Some(topic) = self.topic().cloned() else {
            self.status = Some("No topics configured".to_string());
            return;
        };

        match io::scan_exercise_files(&self.exercises_path, &topic) {
            Ok(files) if files.is_empty() => {
                self.status = Some(format!(
                    "No files found in the '{}' directory.",
                    topic.dir
                ));
            }
            Ok(files) => {
                self.files = files;
                self.status = None;
                self.file_list_state.select(Some(0));
                self.update_content_for_selection();
            }
            Err(e) => {
                log::warn!("failed to scan topic {}: {e}", topic.title);
                self.status = Some(format!("Error reading topic: {e}"));
            }
        }
    }

    fn next_topic(&mut self) {
        if !self.topics.is_empty() {
            self.topic_index = (self.topic_index + 1) % self.topics.len();
            self.load_topic();
        }
    }

    fn previous_topic(&mut self) {
        if !self.topics.is_empty() {
            self.topic_index = self
                .topic_index
                .checked_sub(1)
                .unwrap_or(self.topics.len() - 1);
            self.load_topic();
        }
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_hints(&mut self) {
        self.options.show_hints = !self.options.show_hints;
        self.update_content_for_selection();
    }

    fn toggle_solutions(&mut self) {
        self.options.show_solutions = !self.options.show_solutions;
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(10);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(10);
    }

    fn update_content_for_selection(&mut self) {
        let (Some(topic), Some(file)) = (self.topic(), self.selected_file()) else {
            return;
        };

        self.current_content = match io::load_exercise(topic, file, &self.exercises_path) {
            Ok(content) => render_content(&content, self.options),
            Err(LoadError::Parse(e)) => {
                log::warn!("failed to parse {}: {e}", file.relative_path());
                vec![RenderedLine {
                    tone: Tone::Task,
                    text: NOTEBOOK_ERROR.to_string(),
                }]
            }
            Err(LoadError::Io(e)) => vec![RenderedLine {
                tone: Tone::Task,
                text: format!("Error reading file: {e}"),
            }],
        };
    }

    fn export_selected(&mut self) {
        let (Some(topic), Some(file)) = (self.topic(), self.selected_file()) else {
            return;
        };

        let dest = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.status = Some(
            match io::export_exercise(topic, file, &self.exercises_path, &dest) {
                Ok(written) => {
                    let names: Vec<_> = written.iter().map(|p| p.display().to_string()).collect();
                    format!(
                        "Exported {} ({})",
                        names.join(", "),
                        topic.kind.mime_type()
                    )
                }
                Err(e) => format!("Export failed: {e}"),
            },
        );
    }

    fn header_line(&self) -> String {
        match (self.topic(), self.selected_file()) {
            (Some(topic), Some(file)) => match topic.colab_link(file) {
                Some(link) => format!("{} | Colab: {link}", file.display_name()),
                None => file.display_name().to_string(),
            },
            _ => String::new(),
        }
    }
}

fn print_file(path: &str) -> Result<()> {
    let content = match io::load_path(&PathBuf::from(path)) {
        Ok(content) => content,
        Err(LoadError::Parse(e)) => {
            log::warn!("failed to parse {path}: {e}");
            anyhow::bail!(NOTEBOOK_ERROR);
        }
        Err(e) => return Err(e.into()),
    };
    for line in render_content(&content, RenderOptions::expanded()) {
        println!("{}", line.text);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 3 && args[1] == "--print" {
        return print_file(&args[2]);
    }

    let config;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        config = Config::new(PathBuf::from(&args[1]));
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(loaded)) => {
                config = loaded;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No exercises path provided and no config file found");
                eprintln!("Usage: {} <exercises-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <exercises-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [exercises-folder-path]", args[0]);
        eprintln!("       {} --print <file.sql|file.ipynb>", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_exercises_dir(&config.exercises_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Exercises path '{}'{} is invalid: {e}",
            config.exercises_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Tab => app.next_topic(),
                KeyCode::BackTab => app.previous_topic(),
                KeyCode::Char('h') => app.toggle_hints(),
                KeyCode::Char('s') => app.toggle_solutions(),
                KeyCode::Char('e') => app.export_selected(),
                KeyCode::PageDown => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Heading => Style::default().add_modifier(Modifier::BOLD),
        Tone::Task => Style::default().fg(Color::Red),
        Tone::Hint => Style::default().fg(Color::Yellow),
        Tone::Solution => Style::default().fg(Color::Green),
        Tone::Code => Style::default().fg(Color::Cyan),
        Tone::Toggle => Style::default().add_modifier(Modifier::ITALIC),
        Tone::Divider | Tone::Muted => Style::default().fg(Color::DarkGray),
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Topic bar
    let titles: Vec<Line> = app
        .topics
        .iter()
        .map(|t| Line::from(t.title.clone()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Topics"))
        .select(app.topic_index)
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_widget(tabs, rows[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(vec![Line::from(vec![Span::raw(file.display_name())])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let intro;
    let lines = if app.current_content.is_empty() {
        intro = app.topic().map(render_topic_intro).unwrap_or_default();
        &intro
    } else {
        &app.current_content
    };
    let content_text: Vec<Line> = lines
        .iter()
        .map(|line| Line::styled(line.text.clone(), tone_style(line.tone)))
        .collect();

    let content = Paragraph::new(content_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.header_line()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions or status
    let help_text = match &app.status {
        Some(status) => Line::from(status.clone()),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("Tab: Topic | "),
            Span::raw("↑/k ↓/j: File | "),
            Span::raw("h: Hints | s: Solutions | "),
            Span::raw("e: Export | PgUp/PgDn: Scroll"),
        ]),
    };

    f.render_widget(Paragraph::new(vec![help_text]), rows[2]);
}
