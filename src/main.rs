//! Terminal Tower of Hanoi runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_hanoi::term`. Countdown ticks and solver steps are polled from the
//! same loop that reads keys.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_hanoi::app::App;
use tui_hanoi::config::AppConfig;
use tui_hanoi::core::{Clock, MonotonicClock};
use tui_hanoi::logging::init_logging;
use tui_hanoi::schedule::RenderThrottle;
use tui_hanoi::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_hanoi::types::FRAME_MS;

/// Redraw interval for frames whose content did not change
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::load(&args)?;
    init_logging(config.log_path.as_deref())?;
    info!(
        discs = config.num_discs,
        timer_minutes = config.timer_minutes,
        export = %config.export_path.display(),
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut app = App::new(config, clock);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        let now = clock.now_ms();
        app.update(now);

        let snap = app.snapshot();
        if throttle.should_render(now, app.fingerprint(&snap)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, &app.hud(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, clock.now_ms());
                    if app.should_quit() {
                        info!("quit");
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }
    }
}
