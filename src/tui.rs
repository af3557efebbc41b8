//! Terminal host: raw byte input, painting, and the ex prompt.

use std::collections::VecDeque;
use std::io::{self, Read, Stdout};
use std::panic;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    style::Print,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::warn;
use vi_cjk::{
    CodepointDecoder, EscapeFilter, InputEvent, KeyCode, LineSource, Range, Session, Storage,
};

/// How long a lone escape waits for the rest of a key sequence.
const ESCAPE_TIMEOUT: Duration = Duration::from_millis(25);

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Raw bytes from the stdin reader thread; disconnected at end of input.
    input: Receiver<io::Result<u8>>,
    escapes: EscapeFilter,
    queued: VecDeque<InputEvent>,
    /// First buffer line on screen.
    top: usize,
}

impl Tui {
    /// Switches to raw mode and the alternate screen until dropped.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore();
            default_hook(info);
        }));

        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).inspect_err(|_| restore())?;
        Ok(Self {
            terminal,
            input: spawn_reader(),
            escapes: EscapeFilter::new(),
            queued: VecDeque::new(),
            top: 0,
        })
    }

    /// Next input event, or `None` at end of input. Escape sequences from
    /// cursor and function keys come back as a single function key.
    pub fn read_event(&mut self) -> io::Result<Option<InputEvent>> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Ok(Some(event));
            }
            let received = if self.escapes.is_pending() {
                match self.input.recv_timeout(ESCAPE_TIMEOUT) {
                    Err(RecvTimeoutError::Timeout) => {
                        self.queued.extend(self.escapes.flush());
                        continue;
                    }
                    other => other.ok(),
                }
            } else {
                self.input.recv().ok()
            };
            let Some(unit) = received.transpose()? else {
                return Ok(self.escapes.flush());
            };
            self.queued.extend(self.escapes.feed(unit));
        }
    }

    pub fn draw<S: Storage>(&mut self, session: &Session<S>) -> io::Result<()> {
        let top = &mut self.top;
        self.terminal.draw(|f| ui(f, session, top))?;
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        let mut decoder = CodepointDecoder::new();
        let mut line = String::new();
        let result = loop {
            self.draw_prompt(&line)?;
            let Some(event) = self.read_event()? else {
                break None;
            };
            let ch = match event {
                InputEvent::Unit(unit) => decoder.feed(unit),
                InputEvent::Key(_) => {
                    decoder.reset();
                    None
                }
            };
            match event.key().map(|ke| ke.code) {
                Some(KeyCode::Enter) => break Some(line),
                Some(KeyCode::Esc) => break None,
                Some(KeyCode::Backspace) => {
                    line.pop();
                }
                _ => line.extend(ch),
            }
        };
        // The prompt painted behind ratatui's back; force a full repaint.
        self.terminal.clear()?;
        Ok(result)
    }

    fn draw_prompt(&mut self, line: &str) -> io::Result<()> {
        let (_, rows) = terminal::size()?;
        execute!(
            io::stdout(),
            MoveTo(0, rows.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            Print(':'),
            Print(line),
        )
    }
}

impl LineSource for Tui {
    fn read_line(&mut self) -> Option<String> {
        self.prompt().unwrap_or_else(|err| {
            warn!(target: "tui", %err, "ex prompt failed");
            None
        })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore();
    }
}

/// Reads stdin on its own thread so a held escape can time out.
fn spawn_reader() -> Receiver<io::Result<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut stdin = io::stdin().lock();
        let mut unit = [0u8; 1];
        loop {
            let sent = match stdin.read(&mut unit) {
                Ok(0) => return,
                Ok(_) => tx.send(Ok(unit[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    let _ = tx.send(Err(e));
                    return;
                }
            };
            if sent.is_err() {
                return;
            }
        }
    });
    rx
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn ui<S: Storage>(f: &mut Frame, session: &Session<S>, top: &mut usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.size());
    let (text_area, status_area) = (chunks[0], chunks[1]);

    let engine = session.engine();
    let buffer = engine.buffer();
    let snapshot = engine.snapshot();
    let rows = usize::from(text_area.height).max(1);

    if snapshot.cursor.line < *top {
        *top = snapshot.cursor.line;
    } else if snapshot.cursor.line >= *top + rows {
        *top = snapshot.cursor.line + 1 - rows;
    }

    let lines: Vec<Line> = (*top..*top + rows)
        .map(|i| match buffer.line(i) {
            Some(text) => styled_line(text, i, snapshot.selection),
            None => Line::from("~"),
        })
        .collect();
    f.render_widget(Paragraph::new(lines), text_area);

    let status = Paragraph::new(session.status_line())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(status, status_area);

    let max_x = text_area.width.saturating_sub(1);
    let x = u16::try_from(snapshot.display_col).unwrap_or(max_x).min(max_x);
    let y = u16::try_from(snapshot.cursor.line - *top).unwrap_or(0);
    f.set_cursor(text_area.x + x, text_area.y + y);
}

fn styled_line(text: &str, line: usize, selection: Option<Range>) -> Line<'_> {
    let Some(sel) = selection.filter(|s| s.start.line <= line && line <= s.end.line) else {
        return Line::from(text);
    };
    let len = text.chars().count();
    let from = if line == sel.start.line { sel.start.col } else { 0 };
    let to = if line == sel.end.line { sel.end.col } else { len };

    let split = |col: usize| text.char_indices().nth(col).map_or(text.len(), |(i, _)| i);
    let (a, b) = (split(from), split(to.max(from)));
    Line::from(vec![
        Span::raw(&text[..a]),
        Span::styled(&text[a..b], Style::default().bg(Color::Blue)),
        Span::raw(&text[b..]),
    ])
}
