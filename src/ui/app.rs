//! Interactive browser loop
//!
//! Owns both trees and the log buffer. Input, UI tasks from the intent
//! consumer and new log lines all funnel through [`App::run`], which is the
//! only place display state changes.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::debug;

use crate::browser::{dispatch, navigation_for, KeyOutcome, LazyTree, UiQueue};
use crate::logging::LogBuffer;

use super::render::{log_lines, tree_lines};
use super::screen::{self, Layout, Pane};
use super::terminal::Palette;

/// Pane with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Artists,
    Playlists,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Artists => Focus::Playlists,
            Focus::Playlists => Focus::Artists,
        }
    }
}

pub struct App {
    artists: LazyTree,
    playlists: LazyTree,
    /// Tasks the intent consumer posts against the playlist tree
    playlist_tasks: UiQueue<LazyTree>,
    log: Arc<LogBuffer>,
    palette: Palette,
    focus: Focus,
    scroll: [usize; 2],
    quit: bool,
}

impl App {
    pub fn new(
        artists: LazyTree,
        playlists: LazyTree,
        playlist_tasks: UiQueue<LazyTree>,
        log: Arc<LogBuffer>,
        palette: Palette,
    ) -> Self {
        Self {
            artists,
            playlists,
            playlist_tasks,
            log,
            palette,
            focus: Focus::Artists,
            scroll: [0, 0],
            quit: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn artists(&self) -> &LazyTree {
        &self.artists
    }

    pub fn playlists(&self) -> &LazyTree {
        &self.playlists
    }

    fn focused_tree(&mut self) -> &mut LazyTree {
        match self.focus {
            Focus::Artists => &mut self.artists,
            Focus::Playlists => &mut self.playlists,
        }
    }

    /// Handle one key. Returns true when the screen needs a redraw.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return false;
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.quit = true;
                return false;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                return true;
            }
            _ => {}
        }

        let tree = self.focused_tree();
        match dispatch(tree, &key) {
            KeyOutcome::Consumed => true,
            KeyOutcome::PassThrough => match navigation_for(&key) {
                Some(nav) => tree.navigate(nav),
                None => false,
            },
        }
    }

    /// Run queued playlist updates. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        self.playlist_tasks.drain(&mut self.playlists)
    }

    /// Drive the UI until quit. `tick` bounds how long input polling blocks
    /// before queued updates and new log lines are picked up.
    pub fn run<W: Write>(&mut self, out: &mut W, tick: Duration) -> io::Result<()> {
        let mut dirty = true;
        let mut seen_log = self.log.generation();

        while !self.quit {
            if self.run_pending() > 0 {
                dirty = true;
            }
            let generation = self.log.generation();
            if generation != seen_log {
                seen_log = generation;
                dirty = true;
            }

            if dirty {
                let (width, height) = terminal::size()?;
                self.draw(out, width, height)?;
                dirty = false;
            }

            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) => dirty |= self.handle_key(key),
                    Event::Resize(width, height) => {
                        debug!("resized to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn draw<W: Write>(&mut self, out: &mut W, width: u16, height: u16) -> io::Result<()> {
        let layout = Layout::compute(width, height);
        screen::clear(out)?;

        let panes = [
            (Focus::Artists, layout.artists, 0),
            (Focus::Playlists, layout.playlists, 1),
        ];
        for (focus, area, slot) in panes {
            let tree = match focus {
                Focus::Artists => &self.artists,
                Focus::Playlists => &self.playlists,
            };
            let inner = area.inner();
            let lines = tree_lines(
                tree,
                inner.width as usize,
                inner.height as usize,
                &mut self.scroll[slot],
                &self.palette,
            );
            let pane = Pane {
                area,
                title: tree.title(),
                focused: self.focus == focus,
                lines: &lines,
            };
            screen::draw_pane(out, &pane, &self.palette)?;
        }

        let inner = layout.log.inner();
        let tail = self.log.tail(inner.height as usize);
        let lines = log_lines(&tail, inner.width as usize, inner.height as usize, &self.palette);
        let pane = Pane {
            area: layout.log,
            title: "LOG",
            focused: false,
            lines: &lines,
        };
        screen::draw_pane(out, &pane, &self.palette)?;

        out.flush()
    }
}
