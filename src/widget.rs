use crate::cli::Settings;
use crate::graphics::{draw_cloud, draw_debug, draw_notice};
use crate::velocity::VelocityTracker;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use crate::app_error::Result;
use tagsphere::{Event, Point, Projection, Size, TagCloud};

/// Frames a clicked tag stays highlighted with spin held
const HIGHLIGHT_FRAMES: u32 = 36;

/// Puts the terminal into raw, full-screen, mouse-capturing mode and
/// restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if let Err(err) = execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen) {
            log::warn!("failed to restore terminal screen: {}", err);
        }
        if let Err(err) = disable_raw_mode() {
            log::warn!("failed to leave raw mode: {}", err);
        }
    }
}

/// Terminal front end for a [`TagCloud`]: delivers frame ticks and mouse
/// gestures to the cloud and draws its projections.
pub struct CloudWidget {
    cloud: TagCloud<String>,
    projections: Vec<Projection>,
    tracker: VelocityTracker,
    /// Set while the button is down; `true` once the pointer has dragged
    press: Option<bool>,
    /// Highlighted tag and frames left before spin resumes
    highlight: Option<(usize, u32)>,
    /// Spin held from the keyboard
    paused: bool,
    debug: bool,
    quit: bool,
    frame_period: Duration,
    columns: u16,
    rows: u16,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl CloudWidget {
    pub fn new(settings: &Settings, columns: u16, rows: u16) -> Self {
        let container = Size::new(columns as f64, rows as f64);
        let mut widget = CloudWidget {
            cloud: TagCloud::new(settings.config.clone(), container),
            projections: Vec::with_capacity(settings.tags.len()),
            tracker: VelocityTracker::new(),
            press: None,
            highlight: None,
            paused: false,
            debug: false,
            quit: false,
            frame_period: Duration::from_secs(1) / settings.fps,
            columns,
            rows,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        };
        let projections = &mut widget.projections;
        widget.cloud.set_items(
            settings.tags.clone(),
            &mut |index: usize, _: &String, p: &Projection| store(projections, index, p),
        );
        widget
    }

    /// Runs the frame loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        let mut out = io::stdout();
        let _guard = TerminalGuard::enter(&mut out)?;
        let mut last_frame = Instant::now();
        self.draw(&mut out)?;

        while !self.quit {
            let timeout = self.frame_period.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                self.handle_event(event::read()?, Instant::now());
            }

            let elapsed = last_frame.elapsed();
            if elapsed >= self.frame_period {
                last_frame = Instant::now();
                self.frame(elapsed.as_secs_f64());
                self.draw(&mut out)?;
            }
        }
        log::info!("shutting down with {} tags", self.cloud.len());
        Ok(())
    }

    fn step(&mut self, event: Event) -> bool {
        let projections = &mut self.projections;
        self.cloud.step(
            event,
            &mut |index: usize, _: &String, p: &Projection| store(projections, index, p),
        )
    }

    /// One frame tick: advance whichever driver is active and count down
    /// the highlight.
    fn frame(&mut self, dt: f64) {
        self.step(Event::Frame { dt });
        if let Some((index, frames_left)) = self.highlight {
            if frames_left <= 1 {
                self.highlight = None;
                if !self.paused {
                    self.step(Event::Release);
                }
            } else {
                self.highlight = Some((index, frames_left - 1));
            }
        }
    }

    fn handle_event(&mut self, event: TermEvent, now: Instant) {
        match event {
            TermEvent::Key(key) => self.handle_key(key),
            TermEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            TermEvent::Resize(columns, rows) => {
                self.columns = columns;
                self.rows = rows;
                self.step(Event::Resize(Size::new(columns as f64, rows as f64)));
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('d') | KeyCode::Char('D') => self.debug = !self.debug,
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.paused = !self.paused;
                // Drop any drag in flight, like a cancelled gesture
                if self.press.take().is_some() {
                    self.step(Event::DragEnd {
                        velocity: Point::default(),
                    });
                }
                self.step(if self.paused { Event::Hold } else { Event::Release });
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.highlight = None;
                self.paused = false;
                let projections = &mut self.projections;
                projections.clear();
                self.cloud.relayout(&mut |index: usize, _: &String, p: &Projection| {
                    store(projections, index, p)
                });
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let point = Point::new(mouse.column as f64, mouse.row as f64);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A drag takes over from a keyboard pause
                if self.paused {
                    self.paused = false;
                    log::debug!("pause lifted by drag at {:?}", point);
                }
                self.tracker.reset();
                self.tracker.push(now, point);
                self.press = Some(false);
                self.step(Event::DragBegin(point));
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(moved) = self.press.as_mut() {
                    *moved = true;
                    self.tracker.push(now, point);
                    self.step(Event::DragMove(point));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(moved) = self.press.take() else {
                    return;
                };
                if moved {
                    self.tracker.push(now, point);
                    let velocity = self.tracker.velocity(now);
                    log::debug!("released at {:?} with velocity {:?}", point, velocity);
                    self.step(Event::DragEnd { velocity });
                } else {
                    self.step(Event::DragEnd {
                        velocity: Point::default(),
                    });
                    self.tap(point);
                }
            }
            _ => {}
        }
    }

    /// Highlights the tag under `point` and holds spin for a moment
    fn tap(&mut self, point: Point) {
        // Labels are not scaled in a terminal, so each box is the label's
        // own cells (with a little vertical slack); undo the depth scale
        // `hit_test` applies.
        let centre = Point::new(point.x + 0.5, point.y + 0.5);
        let projections = &self.projections;
        let hit = self.cloud.hit_test(centre, |index, tag: &String| {
            let scale = projections[index].scale;
            let half_width = tag.chars().count() as f64 / 2.0 + 0.5;
            Size::new(half_width / scale, 0.6 / scale)
        });
        if let Some(index) = hit {
            log::info!("tapped {:?}", self.cloud.item(index));
            self.highlight = Some((index, HIGHLIGHT_FRAMES));
            self.step(Event::Hold);
        }
    }

    fn draw(&mut self, out: &mut Stdout) -> Result<()> {
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        draw_cloud(
            out,
            self.cloud.items(),
            &self.projections,
            self.highlight.map(|(index, _)| index),
            self.columns,
            self.rows,
        )?;
        if self.debug {
            let drift = self.cloud.drift_axis();
            let lines = [
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                format!("Mode: {:?}", self.cloud.mode()),
                format!("Drift: ({:.2}, {:.2}, {:.2})", drift[0], drift[1], drift[2]),
                format!("FPS: {:.2}", self.fps),
            ];
            draw_debug(out, &lines)?;
        }
        if self.paused {
            draw_notice(out, "Paused", self.columns, self.rows)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Records a projection emitted by the cloud, growing the buffer on layout
fn store(projections: &mut Vec<Projection>, index: usize, projection: &Projection) {
    if index < projections.len() {
        projections[index] = *projection;
    } else {
        projections.push(*projection);
    }
}
