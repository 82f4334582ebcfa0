use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use snake::{Color, GridGeometry, Point};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

// Terminal cells are about twice as tall as they are wide.
const CELL_WIDTH: TermInt = 2;
const CELL_STR: &str = "██";
const EMPTY_STR: &str = "  ";

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    origin: Coords,
    grid: GridGeometry,
}

impl TermManager {
    pub fn new(grid: GridGeometry) -> crossterm::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), origin: (0, 0), grid })
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn board_size(&self) -> Coords {
        let w = self.grid.columns() as TermInt * CELL_WIDTH + 2;
        let h = self.grid.rows() as TermInt + 2;
        (w, h)
    }

    pub fn fits(&self) -> bool {
        let (w, h) = self.board_size();
        w <= self.width && h <= self.height
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;

        let (w, h) = self.board_size();
        self.origin = (self.width.saturating_sub(w) / 2, self.height.saturating_sub(h) / 2);
        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_events_queue(&self) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn draw_borders(&mut self) -> crossterm::Result<()> {
        let (width, height) = self.board_size();
        let (ox, oy) = self.origin;
        let end_y = oy + height - 1;

        queue!(self.stdout, style::ResetColor)?;
        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            self.print_at((ox + x, oy), ch)?;
            self.print_at((ox + x, end_y), ch)?;
        }

        for y in 1..height - 1 {
            self.print_at((ox, oy + y), '|')?;
            self.print_at((ox + width - 1, oy + y), '|')?;
        }

        self.flush()
    }

    /// Repaints the playfield: blanks every cell, then the apple, then the
    /// snake segments tail first so the head stays on top.
    pub fn draw_frame(&mut self, segments: &[(Point, Color)], apple: (Point, Color)) -> crossterm::Result<()> {
        queue!(self.stdout, style::ResetColor)?;
        for y in 0..self.grid.rows() {
            let (col, row) = self.cell_coords(Point::new(0, y));
            queue!(self.stdout, cursor::MoveTo(col, row))?;
            for _ in 0..self.grid.columns() {
                queue!(self.stdout, style::Print(EMPTY_STR))?;
            }
        }

        self.paint_cell(apple.0, apple.1)?;
        for &(point, color) in segments.iter().rev() {
            self.paint_cell(point, color)?;
        }

        queue!(self.stdout, style::ResetColor)?;
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> crossterm::Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let (w, h) = self.board_size();
        let center = (self.origin.0 + w / 2, self.origin.1 + h / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        queue!(self.stdout, style::ResetColor)?;
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(padded_line))?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, ch: char) -> crossterm::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    fn paint_cell(&mut self, point: Point, color: Color) -> crossterm::Result<()> {
        // Segments laid out beyond the grid by a long spiral are not drawn.
        if !self.grid.contains(point) {
            return Ok(());
        }

        let (col, row) = self.cell_coords(point);
        let fg = style::Color::Rgb { r: color.r, g: color.g, b: color.b };
        queue!(self.stdout, cursor::MoveTo(col, row), style::SetForegroundColor(fg), style::Print(CELL_STR))
    }

    fn cell_coords(&self, point: Point) -> Coords {
        let col = self.origin.0 + 1 + point.x as TermInt * CELL_WIDTH;
        let row = self.origin.1 + 1 + point.y as TermInt;
        (col, row)
    }
}
