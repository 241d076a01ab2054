//! Interactive page demo
//!
//! The terminal rendition of the site's landing page: fractal canvas,
//! navigation drawer, toast notices and the intro-clip toggle, all driven
//! by one synchronous poll-and-dispatch loop.

use crate::colors::{scheme_color, ColorState};
use crate::config::DemoConfig;
use crate::fractal::{FractalState, MAX_DEPTH};
use crate::media::MediaToggle;
use crate::nav::{Drawer, NavLink};
use crate::notify::NoticeBoard;
use crate::surface::{BrailleSurface, Surface};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::Color;
use std::io;

/// Rows reserved below the canvas for the status line
const FOOTER_ROWS: u16 = 1;

/// What a dispatched event asks the loop to do next
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// Owned state of every page component; nothing is shared implicitly
struct PageSession {
    drawer: Option<Drawer>,
    fractal: FractalState,
    colors: ColorState,
    media: MediaToggle,
    board: NoticeBoard,
}

impl PageSession {
    fn new(scheme: u8) -> Self {
        let drawer = Drawer::new(vec![
            NavLink::new("Home", "index.html"),
            NavLink::new("Book a Session", "booking.html"),
            NavLink::new("Referrals", "referral.html"),
            NavLink::new("Consultations", "consultation.html"),
        ]);
        let mut session = Self {
            drawer,
            fractal: FractalState::new(),
            colors: ColorState::new(scheme),
            media: MediaToggle::new(),
            board: NoticeBoard::new(),
        };
        if let Some(drawer) = session.drawer.as_mut() {
            drawer.mark_active("index.html");
        }
        session
    }

    /// Synchronous dispatch: each event routes to exactly one component
    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Flow {
        if self.colors.handle_key(code) {
            return Flow::Redraw;
        }

        match code {
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Esc => {
                // Escape closes the drawer first, quits second
                if let Some(drawer) = self.drawer.as_mut() {
                    if drawer.is_open() {
                        drawer.close();
                        return Flow::Continue;
                    }
                }
                Flow::Quit
            }
            // Click, keyboard and touch all advance the canvas
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('t') => {
                self.fractal.advance();
                Flow::Redraw
            }
            KeyCode::Char('m') => {
                if let Some(drawer) = self.drawer.as_mut() {
                    drawer.toggle();
                }
                Flow::Continue
            }
            KeyCode::Char('p') => {
                let playing = self.media.toggle();
                self.board.post(if playing {
                    "Intro clip playing."
                } else {
                    "Intro clip paused."
                });
                Flow::Continue
            }
            KeyCode::Char('r') => {
                self.media.rewind();
                Flow::Continue
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits follow drawer links while the drawer is open
                if let Some(drawer) = self.drawer.as_mut() {
                    if drawer.is_open() {
                        if let Some(n) = c.to_digit(10) {
                            let index = (n as usize).saturating_sub(1);
                            if let Some(link) = drawer.activate(index) {
                                self.board.post(format!("Now viewing {}.", link.label));
                            }
                        }
                    }
                }
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }
}

fn canvas_rows(height: u16) -> u16 {
    height.saturating_sub(FOOTER_ROWS).max(1)
}

/// Run the page demo until the user quits
pub fn run(config: DemoConfig) -> io::Result<()> {
    let mut term = Terminal::new(true)?;
    term.clear_screen()?;

    let (mut width, mut height) = term.size();
    let mut surface = BrailleSurface::new(width, canvas_rows(height));
    let mut session = PageSession::new(config.scheme);
    let mut needs_redraw = true;

    loop {
        // Check for terminal resize
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or((width, height));
        if new_w != width || new_h != height {
            width = new_w;
            height = new_h;
            term.resize(width, height);
            term.clear_screen()?;
            surface = BrailleSurface::new(width, canvas_rows(height));
            needs_redraw = true;
        }

        if let Some((code, modifiers)) = term.check_key()? {
            match session.handle_key(code, modifiers) {
                Flow::Quit => break,
                Flow::Redraw => needs_redraw = true,
                Flow::Continue => {}
            }
        }

        if needs_redraw {
            let depth = session.fractal.depth();
            let intensity = match depth {
                1 | 2 => 1,
                3 | 4 => 2,
                _ => 3,
            };
            let (color, bold) = scheme_color(session.colors.scheme, intensity, depth == MAX_DEPTH);
            surface.set_fill(color, bold);
            session.fractal.redraw(&mut surface);
            needs_redraw = false;
        }

        session.board.prune();
        session.media.tick(config.time_step);

        term.clear();
        surface.blit(&mut term, 0, 0);
        if let Some(drawer) = session.drawer.as_ref() {
            if drawer.is_open() {
                draw_drawer(&mut term, drawer);
            }
        }
        draw_footer(&mut term, &session, height);
        if !session.board.is_empty() {
            session.board.draw(&mut term);
        }
        term.render()?;

        term.sleep(config.time_step);
    }

    Ok(())
}

/// Left-hand drawer overlay listing the digit shortcuts
fn draw_drawer(term: &mut Terminal, drawer: &Drawer) {
    let border = Color::White;
    let inner = drawer
        .links()
        .iter()
        .map(|l| l.label.chars().count() + 4)
        .max()
        .unwrap_or(0)
        .max(6);
    let box_w = inner + 2;
    let rows = drawer.links().len() + 2;

    term.set(1, 1, '┌', Some(border), false);
    term.set(1, (rows - 1) as i32 + 1, '└', Some(border), false);
    for x in 1..box_w - 1 {
        term.set(1 + x as i32, 1, '─', Some(border), false);
        term.set(1 + x as i32, (rows - 1) as i32 + 1, '─', Some(border), false);
    }
    term.set(box_w as i32, 1, '┐', Some(border), false);
    term.set(box_w as i32, (rows - 1) as i32 + 1, '┘', Some(border), false);

    for (i, link) in drawer.links().iter().enumerate() {
        let y = 2 + i as i32;
        term.set(1, y, '│', Some(border), false);
        let marker = if drawer.active() == Some(i) { '*' } else { ' ' };
        let focused = drawer.focused() == Some(i);
        let label = format!("{}{} {}", marker, i + 1, link.label);
        let padded = format!(" {:<width$}", label, width = inner - 1);
        term.set_str(
            2,
            y,
            &padded,
            Some(if focused { Color::White } else { Color::Grey }),
            focused,
        );
        term.set(box_w as i32, y, '│', Some(border), false);
    }
}

/// Status line: canvas depth, key hints, clip state
fn draw_footer(term: &mut Terminal, session: &PageSession, height: u16) {
    let clip = if session.media.is_playing() {
        format!("clip {}s", session.media.position_secs() as u32)
    } else {
        "clip paused".to_string()
    };
    let footer = format!(
        " depth {}/{}  [space] iterate  [m] menu  [p/r] {}  [q] quit",
        session.fractal.depth(),
        MAX_DEPTH,
        clip
    );
    term.set_str(0, height as i32 - 1, &footer, Some(Color::DarkGrey), false);
}
