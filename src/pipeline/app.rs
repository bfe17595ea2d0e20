//! Mount and run.
//!
//! The screen is a derived of three signals:
//!
//! - `revision`: bumped after every controller change
//! - `size`: terminal size, updated on resize
//! - `palette`: current theme
//!
//! A single effect reads the derived and hands the frame to the
//! [`DiffRenderer`]. Event handlers mutate the controller, then bump
//! `revision`; the effect does the rest.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::Event as CrosstermEvent;
use spark_signals::{derived, effect, signal, Signal};

use super::events::{AppEvent, EventChannel, InputThread};
use super::terminal::{terminal_size, TerminalGuard};
use crate::config::VizConfig;
use crate::error::{Result, VizError};
use crate::input::{map_event, Action};
use crate::playback::{PlaybackController, PlaybackTimer};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::theme::{get_preset, presets::next_preset_name, Palette};
use crate::view::{compose_screen, frame_line, panels::TITLE};

/// Output of the screen derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFrame {
    pub buffer: FrameBuffer,
    pub size: (u16, u16),
}

// =============================================================================
// App
// =============================================================================

/// Mounted application state. Lives on the main thread.
pub struct App {
    controller: Rc<RefCell<PlaybackController>>,
    revision: Signal<u64>,
    size: Signal<(u16, u16)>,
    palette: Signal<Palette>,
    theme_name: String,
    timer: PlaybackTimer,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl App {
    /// Wire signals, derived and render effect. The first frame is drawn here.
    pub fn mount<W: Write + 'static>(
        controller: PlaybackController,
        palette: Palette,
        size: (u16, u16),
        timer: PlaybackTimer,
        mut renderer: DiffRenderer<W>,
    ) -> Self {
        let controller = Rc::new(RefCell::new(controller));
        let revision = signal(0u64);
        let size_signal = signal(size);
        let theme_name = palette.name.clone();
        let palette_signal = signal(palette);

        let screen = {
            let controller = controller.clone();
            let revision = revision.clone();
            let size = size_signal.clone();
            let palette = palette_signal.clone();
            derived(move || {
                let _ = revision.get();
                let (width, height) = size.get();
                let palette = palette.get();
                let ctl = controller.borrow();
                ScreenFrame {
                    buffer: compose_screen(&ctl, &palette, width, height),
                    size: (width, height),
                }
            })
        };

        let mut last_size = size;
        let stop = effect(move || {
            let frame = screen.get();
            if frame.size != last_size {
                renderer.invalidate();
                last_size = frame.size;
            }
            if let Err(err) = renderer.render(&frame.buffer) {
                tracing::warn!(%err, "render failed");
            }
        });

        Self {
            controller,
            revision,
            size: size_signal,
            palette: palette_signal,
            theme_name,
            timer,
            stop_effect: Some(Box::new(stop)),
        }
    }

    pub fn controller(&self) -> std::cell::Ref<'_, PlaybackController> {
        self.controller.borrow()
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Handle one event. Returns false when the app should exit.
    pub fn handle_event(&mut self, event: AppEvent) -> Result<bool> {
        match event {
            AppEvent::Input(CrosstermEvent::Resize(width, height)) => {
                self.size.set((width, height));
                Ok(true)
            }
            AppEvent::Input(input) => match map_event(&input) {
                Some(action) => self.handle_action(action),
                None => Ok(true),
            },
            AppEvent::Tick => {
                self.tick()?;
                Ok(true)
            }
            AppEvent::Stop => Ok(false),
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(false),
            Action::CycleTheme => {
                let name = next_preset_name(&self.theme_name);
                let palette =
                    get_preset(name).ok_or_else(|| VizError::UnknownTheme(name.to_string()))?;
                tracing::info!(theme = name, "theme changed");
                self.theme_name = name.to_string();
                self.palette.set(palette);
            }
            Action::Playback(command) => {
                let speed = {
                    let mut ctl = self.controller.borrow_mut();
                    ctl.apply(command)?;
                    ctl.speed()
                };
                self.timer.set_speed(speed);
                self.sync_timer()?;
                self.bump();
            }
        }
        Ok(true)
    }

    fn tick(&mut self) -> Result<()> {
        let still_playing = self.controller.borrow_mut().tick();
        if !still_playing {
            self.timer.stop();
        }
        self.bump();
        Ok(())
    }

    fn sync_timer(&mut self) -> Result<()> {
        let playing = self.controller.borrow().is_playing();
        self.timer.sync(playing)?;
        Ok(())
    }

    fn bump(&self) {
        self.revision.set(self.revision.get().wrapping_add(1));
    }

    /// Stop the timer and dispose the render effect.
    pub fn unmount(mut self) {
        self.timer.stop();
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.timer.stop();
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Run the interactive UI until the user quits.
pub fn run(config: &VizConfig) -> Result<()> {
    config.validate()?;
    if config.headless {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_headless(config, &mut out)?;
        return Ok(());
    }

    let palette =
        get_preset(&config.theme).ok_or_else(|| VizError::UnknownTheme(config.theme.clone()))?;
    let controller = PlaybackController::new(config)?;

    let mut terminal = TerminalGuard::enter(TITLE)?;
    let channel = EventChannel::new();
    let mut input = InputThread::spawn(channel.sender())?;
    let timer = PlaybackTimer::new(channel.sender(), controller.speed());

    let mut app = App::mount(
        controller,
        palette,
        terminal_size(),
        timer,
        DiffRenderer::stdout(),
    );
    tracing::info!(
        algorithm = config.algorithm.name(),
        size = config.array_size,
        theme = %config.theme,
        "mounted"
    );

    if config.autoplay {
        app.handle_action(Action::Playback(crate::playback::Command::TogglePlay))?;
    }

    let result = event_loop(&mut app, &channel);

    app.unmount();
    input.stop();
    terminal.restore()?;
    result
}

fn event_loop(app: &mut App, channel: &EventChannel) -> Result<()> {
    while let Some(event) = channel.recv() {
        if !app.handle_event(event)? {
            break;
        }
    }
    Ok(())
}

/// Print every frame of one run as text. Returns the number of frames.
///
/// Frame 0 is the untouched input, then one line per recorded step.
pub fn run_headless<W: Write>(config: &VizConfig, out: &mut W) -> Result<usize> {
    let mut ctl = PlaybackController::new(config)?;
    let trace = ctl.ensure_trace();

    writeln!(
        out,
        "{}: {} elements, {} steps",
        ctl.algorithm().display_name(),
        ctl.array().len(),
        trace.len()
    )?;

    let frames = trace.len().max(1);
    for index in 0..frames {
        let frame = trace.frame_at(index, ctl.array());
        writeln!(out, "{}", frame_line(index, &frame))?;
    }
    out.flush()?;

    tracing::debug!(frames, "headless run finished");
    Ok(frames)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::playback::Command;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn setup(array: Vec<i32>) -> (App, EventChannel) {
        let channel = EventChannel::new();
        let controller = PlaybackController::with_array(Algorithm::Bubble, array);
        let timer = PlaybackTimer::new(channel.sender(), controller.speed());
        let app = App::mount(
            controller,
            Palette::default(),
            (80, 24),
            timer,
            DiffRenderer::new(Vec::new()),
        );
        (app, channel)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_quit_stops_loop() {
        let (mut app, _channel) = setup(vec![3, 1, 2]);
        assert!(!app.handle_event(key(KeyCode::Char('q'))).unwrap());
        assert!(!app.handle_event(AppEvent::Stop).unwrap());
    }

    #[test]
    fn test_step_key_advances_controller() {
        let (mut app, _channel) = setup(vec![3, 1, 2]);
        assert!(app.handle_event(key(KeyCode::Right)).unwrap());
        assert_eq!(app.controller().current_step(), 1);
    }

    #[test]
    fn test_play_starts_timer_and_ticks_advance() {
        let (mut app, _channel) = setup(vec![3, 1, 2]);
        app.handle_event(key(KeyCode::Char(' '))).unwrap();
        assert!(app.controller().is_playing());
        assert!(app.timer.is_running());

        app.handle_event(AppEvent::Tick).unwrap();
        assert_eq!(app.controller().current_step(), 1);

        app.handle_event(key(KeyCode::Char(' '))).unwrap();
        assert!(!app.controller().is_playing());
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_ticks_to_end_stop_timer() {
        let (mut app, _channel) = setup(vec![2, 1]);
        app.handle_action(Action::Playback(Command::TogglePlay)).unwrap();
        for _ in 0..10 {
            app.handle_event(AppEvent::Tick).unwrap();
        }
        assert!(app.controller().is_done());
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_speed_keys_update_timer() {
        let (mut app, _channel) = setup(vec![2, 1]);
        app.handle_event(key(KeyCode::Char('+'))).unwrap();
        assert_eq!(app.timer.interval(), app.controller().speed().delay());
        assert_eq!(app.controller().speed().position(), 420);
    }

    #[test]
    fn test_cycle_theme() {
        let (mut app, _channel) = setup(vec![2, 1]);
        assert_eq!(app.theme_name(), "default");
        app.handle_event(key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.theme_name(), "terminal");
    }

    #[test]
    fn test_resize_is_handled() {
        let (mut app, _channel) = setup(vec![2, 1]);
        let event = AppEvent::Input(CrosstermEvent::Resize(100, 30));
        assert!(app.handle_event(event).unwrap());
        assert_eq!(app.size.get(), (100, 30));
    }

    #[test]
    fn test_run_headless_prints_every_frame() {
        let config = VizConfig {
            algorithm: Algorithm::Selection,
            array_size: 5,
            seed: Some(1),
            headless: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        let frames = run_headless(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), frames + 1);
        assert!(lines[0].starts_with("Selection Sort: 5 elements"));
        assert!(lines[1].starts_with("#0 "));
        assert!(lines[1].ends_with("sorted=[] pivot=-"));
    }
}
