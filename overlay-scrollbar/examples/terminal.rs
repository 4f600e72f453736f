//! Full-screen terminal page with one overlay-scrollbar container.
//!
//! Wheel, drag the thumb, click the track, or use the arrow keys. `q` quits.
//! Logs go to `overlay-scrollbar.log`.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use overlay_dom::{Document, ElementId, Event, Position, Rect, Rgb};
use overlay_scrollbar::{
    CONTAINER_ATTR, CONTENT_ATTR, Overlay, ScrollbarConfig, ScrollbarTheme, find_containers, init,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const LINES: usize = 200;
const BACKDROP: Rgb = Rgb::new(24, 24, 32);
/// Redraw cadence while the track is fading.
const FRAME: Duration = Duration::from_millis(16);

/// Raw mode, alternate screen and mouse capture for the lifetime of the value.
struct Screen {
    stdout: Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

struct Page {
    container: ElementId,
    content: ElementId,
}

impl Page {
    fn build(doc: &mut Document) -> Self {
        let body = doc.body();
        let container = doc.create_element("main");
        doc.set_attribute(container, CONTAINER_ATTR, "");
        if let Some(style) = doc.inline_style_mut(container) {
            style.position = Some(Position::Relative);
        }
        doc.append_child(body, container);

        let content = doc.create_element("article");
        doc.set_attribute(content, CONTENT_ATTR, "");
        doc.append_child(container, content);

        let page = Self { container, content };
        let (width, height) = doc.viewport_size();
        page.layout(doc, width, height);
        page
    }

    /// One-cell margin around the container; one line of content per row.
    fn layout(&self, doc: &mut Document, width: f32, height: f32) {
        let rect = Rect::new(1.0, 1.0, (width - 2.0).max(0.0), (height - 2.0).max(0.0));
        doc.set_rect(self.container, rect);
        doc.set_rect(self.content, rect);
        doc.set_scroll_height(self.content, LINES as f32);
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("overlay-scrollbar.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let (width, height) = terminal::size()?;
    let mut doc = Document::new(width as f32, height as f32);
    let page = Page::build(&mut doc);

    let config = ScrollbarConfig::new()
        .theme(ScrollbarTheme::terminal())
        .fade_delay(Duration::from_millis(800));
    let containers = find_containers(&doc, &config);
    let mut overlay = init(&mut doc, &containers, config);

    let mut screen = Screen::new()?;

    loop {
        let now = Instant::now();
        overlay.tick(&mut doc, now);
        draw(&mut screen.stdout, &doc, &overlay, &page, now)?;

        let timeout = if doc.has_active_transitions(now) {
            FRAME
        } else {
            overlay
                .next_deadline(&doc)
                .map_or(Duration::from_secs(60), |d| d.saturating_duration_since(now))
        };
        if !event::poll(timeout)? {
            continue;
        }

        let raw = event::read()?;
        let now = Instant::now();
        if let CrosstermEvent::Key(KeyEvent { code, .. }) = raw {
            let delta = match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => -1.0,
                KeyCode::Down => 1.0,
                KeyCode::PageUp => -doc.client_height(page.content),
                KeyCode::PageDown => doc.client_height(page.content),
                _ => continue,
            };
            doc.scroll_by(page.content, delta);
            overlay.flush(&mut doc, now);
            continue;
        }

        if let Some(event) = Event::from_crossterm(&raw) {
            // Lay out before listeners see the resize.
            if let Event::Resize { width, height } = event {
                page.layout(&mut doc, width, height);
            }
            overlay.handle_event(&mut doc, &event, now);
        }
    }
}

fn to_ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn draw(
    out: &mut impl Write,
    doc: &Document,
    overlay: &Overlay,
    page: &Page,
    now: Instant,
) -> io::Result<()> {
    let Some(rect) = doc.rect(page.container) else {
        return Ok(());
    };
    let first = doc.scroll_top(page.content).round() as usize;
    let width = rect.width as usize;

    queue!(out, SetBackgroundColor(to_ct(BACKDROP)), terminal::Clear(terminal::ClearType::All))?;
    for row in 0..rect.height as usize {
        let line = first + row;
        if line >= LINES {
            break;
        }
        let text = format!("{line:>4}  overlay scrollbar demo line");
        let text: String = text.chars().take(width).collect();
        queue!(
            out,
            cursor::MoveTo(rect.x as u16, rect.y as u16 + row as u16),
            SetForegroundColor(CtColor::Grey),
            Print(text)
        )?;
    }

    let appearance = overlay
        .scrollbar_for(page.container)
        .and_then(|scrollbar| scrollbar.appearance(doc, now));
    if let Some(appearance) = appearance.filter(|a| a.is_visible()) {
        let color = to_ct(appearance.fill_over(BACKDROP));
        let thumb = appearance.thumb;
        let top = thumb.top().round() as u16;
        let rows = thumb.height.round().max(1.0) as u16;
        for y in top..top + rows {
            queue!(
                out,
                cursor::MoveTo(thumb.left().round() as u16, y),
                SetBackgroundColor(color),
                Print(" ")
            )?;
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}
