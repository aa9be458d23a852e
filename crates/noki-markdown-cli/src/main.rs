mod terminal;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noki_markdown_config::{Config, OutputFormat};
use noki_markdown_engine::{RenderOptions, render, to_html, to_plain_text};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env, fs,
    io::{self, IsTerminal, Read, Stdout, stdout},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: noki-markdown-cli [--format html|text|tui] [PATH|-]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    format: Option<OutputFormat>,
    input: Input,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Render(Args),
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut format = None;
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let value = match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-f" | "--format" => Some(
                iter.next()
                    .with_context(|| format!("{arg} needs a value"))?
                    .as_str(),
            ),
            other => other.strip_prefix("--format="),
        };

        if let Some(value) = value {
            format = Some(value.parse::<OutputFormat>()?);
            continue;
        }

        if arg.starts_with('-') && arg != "-" {
            bail!("Unknown option '{arg}'");
        }
        if input.is_some() {
            bail!("Only one input path may be given");
        }
        input = Some(if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        });
    }

    Ok(Command::Render(Args {
        format,
        input: input.unwrap_or(Input::Stdin),
    }))
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read markdown from stdin")?;
            Ok(content)
        }
        Input::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file '{}'", path.display())),
    }
}

/// Picks the output format: the flag, then the config file (whose default is
/// `tui`). The terminal preview falls back to text when the markdown comes
/// from stdin or stdout is not a terminal.
fn resolve_format(
    flag: Option<OutputFormat>,
    config: &Config,
    input: &Input,
    is_tty: bool,
) -> OutputFormat {
    let format = flag.unwrap_or(config.format);
    if format == OutputFormat::Tui && (*input == Input::Stdin || !is_tty) {
        log::warn!("Terminal preview needs a file argument and a terminal, printing text instead");
        return OutputFormat::Text;
    }
    format
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(Command::Render(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let format = resolve_format(args.format, &config, &args.input, stdout().is_terminal());
    log::info!("Rendering {} as {format}", args.input.label());

    let content = read_input(&args.input)?;
    let nodes = render(Some(content.as_str()));
    let opts = RenderOptions {
        bullet: config.bullet.clone(),
    };

    match format {
        OutputFormat::Html => print!("{}", to_html(&nodes, &opts)),
        OutputFormat::Text => println!("{}", to_plain_text(&nodes)),
        OutputFormat::Tui => {
            let lines = terminal::to_lines(&nodes, &opts);
            preview(args.input.label(), lines, config.wrap)?;
        }
    }

    Ok(())
}

struct Preview {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
    wrap: bool,
}

impl Preview {
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }
}

fn preview(title: String, lines: Vec<Line<'static>>, wrap: bool) -> Result<()> {
    let mut app = Preview {
        title,
        lines,
        scroll: 0,
        wrap,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // leave the shell usable
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_preview(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_preview(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut Preview) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(20),
                KeyCode::PageUp => app.scroll_by(-20),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll = app.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &Preview) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content = if app.lines.is_empty() {
        vec![Line::from("Nothing to render")]
    } else {
        app.lines.clone()
    };

    let mut body = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .scroll((app.scroll, 0));
    if app.wrap {
        body = body.wrap(Wrap { trim: false });
    }
    f.render_widget(body, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("PgUp/PgDn: Page | g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Result<Command> {
        let owned: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        parse_args(&owned)
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(
            args(&[]).unwrap(),
            Command::Render(Args {
                format: None,
                input: Input::Stdin
            })
        );
    }

    #[test]
    fn format_flag_and_path() {
        assert_eq!(
            args(&["--format", "html", "notes.md"]).unwrap(),
            Command::Render(Args {
                format: Some(OutputFormat::Html),
                input: Input::File(PathBuf::from("notes.md"))
            })
        );
        assert_eq!(
            args(&["-", "--format=text"]).unwrap(),
            Command::Render(Args {
                format: Some(OutputFormat::Text),
                input: Input::Stdin
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(args(&["notes.md", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(args(&["--format"]).is_err());
        assert!(args(&["--format", "pdf"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.md", "b.md"]).is_err());
    }

    fn file() -> Input {
        Input::File(PathBuf::from("notes.md"))
    }

    fn config_with(format: OutputFormat) -> Config {
        Config {
            format,
            ..Config::default()
        }
    }

    #[test]
    fn flag_beats_config() {
        let config = config_with(OutputFormat::Html);
        assert_eq!(
            resolve_format(Some(OutputFormat::Text), &config, &file(), true),
            OutputFormat::Text
        );
    }

    #[test]
    fn config_beats_default() {
        let config = config_with(OutputFormat::Html);
        assert_eq!(
            resolve_format(None, &config, &file(), true),
            OutputFormat::Html
        );
    }

    #[test]
    fn default_is_terminal_preview() {
        assert_eq!(
            resolve_format(None, &Config::default(), &file(), true),
            OutputFormat::Tui
        );
    }

    #[test]
    fn preview_of_stdin_falls_back_to_text() {
        assert_eq!(
            resolve_format(Some(OutputFormat::Tui), &Config::default(), &Input::Stdin, true),
            OutputFormat::Text
        );
    }

    #[test]
    fn preview_without_terminal_falls_back_to_text() {
        assert_eq!(
            resolve_format(None, &Config::default(), &file(), false),
            OutputFormat::Text
        );
    }

    #[test]
    fn other_formats_ignore_terminal_state() {
        assert_eq!(
            resolve_format(Some(OutputFormat::Html), &Config::default(), &Input::Stdin, false),
            OutputFormat::Html
        );
    }

    #[test]
    fn scroll_is_clamped() {
        let mut app = Preview {
            title: String::new(),
            lines: vec![Line::from("a"), Line::from("b"), Line::from("c")],
            scroll: 0,
            wrap: true,
        };
        app.scroll_by(-5);
        assert_eq!(app.scroll, 0);
        app.scroll_by(10);
        assert_eq!(app.scroll, 2);
    }
}
