//! Transient toast notices
//!
//! Notices self-expire after a fixed delay. There is no queue and no
//! de-duplication; concurrent notices simply stack.

use crate::terminal::Terminal;
use crossterm::style::Color;
use std::time::{Duration, Instant};

/// How long a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_millis(2500);

struct Notice {
    text: String,
    posted: Instant,
}

impl Notice {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.posted) >= NOTICE_TTL
    }
}

/// Stack of live notices, newest last
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }

    pub fn post(&mut self, text: impl Into<String>) {
        self.notices.push(Notice {
            text: text.into(),
            posted: Instant::now(),
        });
    }

    /// Drop notices past their lifetime
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.prune_at(now);
    }

    fn prune_at(&mut self, now: Instant) {
        self.notices.retain(|n| !n.expired(now));
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().map(|n| n.text.as_str())
    }

    /// Draw live notices as bordered boxes stacked up from the bottom,
    /// newest lowest
    pub fn draw(&self, term: &mut Terminal) {
        let (width, height) = term.size();
        let border = Color::White;
        let text_color = Color::Grey;

        let mut bottom = height as i32 - 2;
        for notice in self.notices.iter().rev() {
            let inner = notice.text.chars().count();
            let box_w = inner + 4;
            let start_x = (width as usize).saturating_sub(box_w) as i32 / 2;
            let top = bottom - 2;
            if top < 0 {
                break;
            }

            term.set(start_x, top, '┌', Some(border), false);
            term.set(start_x, top + 1, '│', Some(border), false);
            term.set(start_x, top + 2, '└', Some(border), false);
            for i in 0..inner + 2 {
                term.set(start_x + 1 + i as i32, top, '─', Some(border), false);
                term.set(start_x + 1 + i as i32, top + 2, '─', Some(border), false);
            }
            term.set_str(
                start_x + 2,
                top + 1,
                &notice.text,
                Some(text_color),
                false,
            );
            term.set(start_x + 1, top + 1, ' ', None, false);
            term.set(start_x + 2 + inner as i32, top + 1, ' ', None, false);
            let right = start_x + box_w as i32 - 1;
            term.set(right, top, '┐', Some(border), false);
            term.set(right, top + 1, '│', Some(border), false);
            term.set(right, top + 2, '┘', Some(border), false);

            bottom = top - 1;
        }
    }
}
