//! Keyboard diagnostic.
//!
//! Prints raw key events next to the input events the race would receive,
//! including releases synthesized by the timeout. Useful for checking
//! whether a terminal reports key releases. Press `q` to quit.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use pole_position::input::{should_quit, InputHandler};
use pole_position::term::TerminalRenderer;
use pole_position::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut term = TerminalRenderer::new();
    term.enter()?;
    // Plain scrolling output instead of the alternate screen.
    crossterm::execute!(io::stdout(), terminal::LeaveAlternateScreen)?;

    let result = run(&term, &config);

    let _ = term.exit();
    result
}

fn line(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{text}\r\n")?;
    out.flush()?;
    Ok(())
}

fn run(term: &TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut out = io::stdout();
    let mut input = InputHandler::new()
        .with_key_release_timeout_ms(config.key_release_timeout_ms)
        .with_release_events(term.keyboard_enhanced());

    line(
        &mut out,
        &format!(
            "key releases reported: {} (timeout {}ms). q quits.",
            term.keyboard_enhanced(),
            input.key_release_timeout_ms()
        ),
    )?;

    let mut last = Instant::now();
    loop {
        if event::poll(Duration::from_millis(20))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
                let mapped = input
                    .handle_key_event(key)
                    .map(|ev| ev.as_str())
                    .unwrap_or("-");
                line(&mut out, &format!("{:?} {:?} -> {}", key.kind, key.code, mapped))?;
            }
        }

        let elapsed = last.elapsed().as_millis() as u32;
        last = Instant::now();
        for ev in input.update(elapsed) {
            line(&mut out, &format!("(timeout) -> {}", ev.as_str()))?;
        }
    }
}
