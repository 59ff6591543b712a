//! Blocking terminal front end: raw-mode alternate screen, synchronous key
//! reads, and a text rendering of the board. Owns the key-to-`Move` mapping
//! so the engine never sees key codes.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use rand::Rng;

use crate::engine::Move;
use crate::game::{Game, Status};

enum Input {
    Step(Move),
    Quit,
}

/// Run the blocking display/input loop until the player wins, loses, or
/// quits. The terminal is restored on every exit path.
pub fn run<R: Rng>(game: &mut Game<R>) -> Result<()> {
    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide)?;
    let result = play(game, &mut out);
    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn play<R: Rng>(game: &mut Game<R>, out: &mut impl Write) -> Result<()> {
    loop {
        draw(game, out)?;
        match game.status() {
            Status::Won => return farewell(out, "You won"),
            Status::Lost => return farewell(out, "You lost"),
            Status::Playing => {}
        }
        match read_input()? {
            Input::Quit => {
                debug!("player quit");
                return Ok(());
            }
            Input::Step(mv) => {
                game.apply(mv)?;
            }
        }
    }
}

fn draw<R: Rng>(game: &Game<R>, out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0), Print("2048"))?;
    let mut row = 2u16;
    for line in game.board().to_string().lines() {
        queue!(out, cursor::MoveTo(0, row), Print(line))?;
        row += 1;
    }
    queue!(
        out,
        cursor::MoveTo(0, row + 1),
        Print("arrow keys move, q or esc quits")
    )?;
    out.flush()
}

/// Show the end banner and wait for one key before leaving.
fn farewell(out: &mut impl Write, message: &str) -> Result<()> {
    let (_, rows) = terminal::size()?;
    queue!(
        out,
        cursor::MoveTo(0, rows.saturating_sub(2)),
        Print(message),
        Print(" - press any key")
    )?;
    out.flush()?;
    wait_for_key()?;
    Ok(())
}

/// Block until a key press that maps to a move or quit; anything else is
/// ignored without waking the caller.
fn read_input() -> io::Result<Input> {
    loop {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            let mv = match code {
                KeyCode::Up => Move::Up,
                KeyCode::Down => Move::Down,
                KeyCode::Left => Move::Left,
                KeyCode::Right => Move::Right,
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Input::Quit),
                _ => continue,
            };
            return Ok(Input::Step(mv));
        }
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(());
        }
    }
}
