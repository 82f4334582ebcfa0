use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};

use snake::{Direction, EndReason, InputSignal, Session, TickOutcome};

use crate::term::TermManager;

const POLL_INTERVAL_MS: u64 = 5;

const HELP_LINES: [&str; 2] = ["Start     S", "Quit    ESC"];

pub struct SnakeGame {
    term: TermManager,
    session: Session,
    message_shown: bool,
}

impl SnakeGame {
    pub fn new(session: Session) -> Result<Self> {
        let term = TermManager::new(session.grid())?;
        Ok(SnakeGame { term, session, message_shown: false })
    }

    pub fn initialize(&mut self) -> Result<()> {
        if !self.term.fits() {
            let (w, h) = self.term.board_size();
            let (tw, th) = self.term.get_terminal_size();
            bail!("terminal is {}x{}, the board needs {}x{}", tw, th, w, h);
        }

        self.term.setup()?;
        if let Err(err) = self.draw_board() {
            self.term.restore()?;
            return Err(err.into());
        }
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()?;
        Ok(())
    }

    /// Runs until a quit key is pressed.
    pub fn play(&mut self) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            let input = read_input(&self.term.read_key_events_queue()?);
            if input.quit {
                info!("quit");
                return Ok(());
            }

            if let Err(err) = self.session.apply_input(input) {
                if !err.is_exhaustion() {
                    return Err(err.into());
                }
                warn!("could not start: {}", err);
            }
            if input.start && self.session.is_playing() {
                self.message_shown = false;
                self.draw_board()?;
            }

            if last_tick.elapsed() < self.session.tick_interval() {
                continue;
            }
            last_tick = Instant::now();

            match self.session.tick() {
                TickOutcome::Idle | TickOutcome::Ended(_) => self.show_help()?,
                TickOutcome::Advanced { .. } => self.render()?,
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_board(&mut self) -> crossterm::Result<()> {
        self.term.clear()?;
        self.term.draw_borders()
    }

    fn render(&mut self) -> Result<()> {
        let segments: Vec<_> = self.session.snake().segments().collect();
        let apple = self.session.apple();
        self.term.draw_frame(&segments, (apple.position, apple.color))?;
        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        if self.message_shown {
            return Ok(());
        }

        let headline = self.session.end_reason().map(|reason| match reason {
            EndReason::WallCollision => "You hit the wall!",
            EndReason::SelfCollision => "You bit yourself!",
            EndReason::GridFull => "You won!",
        });
        let size = format!("Size: {}", self.session.snake().size());

        let mut lines: Vec<&str> = vec![];
        if let Some(headline) = headline {
            lines.push(headline);
            lines.push(&size);
            lines.push("");
        }
        lines.extend(HELP_LINES.iter());

        self.term.show_message(&lines)?;
        self.message_shown = true;
        Ok(())
    }
}

/// Folds one batch of key events into a single input snapshot. The last
/// direction key wins.
fn read_input(events: &[KeyEvent]) -> InputSignal {
    let mut input = InputSignal::default();

    for ev in events {
        if is_ctrl_c(ev) {
            input.quit = true;
            continue;
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => input.direction = Some(Direction::Up),
            KeyCode::Char('a') | KeyCode::Left => input.direction = Some(Direction::Left),
            KeyCode::Char('s') | KeyCode::Char('S') => input.start = true,
            KeyCode::Down => input.direction = Some(Direction::Down),
            KeyCode::Char('d') | KeyCode::Right => input.direction = Some(Direction::Right),
            KeyCode::Esc | KeyCode::Char('q') => input.quit = true,
            _ => {}
        }
    }

    input
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_last_direction_wins() {
        let input = read_input(&[key(KeyCode::Up), key(KeyCode::Char('d'))]);
        assert_eq!(input.direction, Some(Direction::Right));
        assert!(!input.start);
        assert!(!input.quit);
    }

    #[test]
    fn test_start_and_quit_keys() {
        assert!(read_input(&[key(KeyCode::Char('S'))]).start);
        assert!(read_input(&[key(KeyCode::Esc)]).quit);
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert!(read_input(&[ctrl_c]).quit);
    }

    #[test]
    fn test_no_keys_no_input() {
        assert_eq!(read_input(&[]), InputSignal::default());
    }
}
