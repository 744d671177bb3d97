// console.rs - Line-oriented seed prompt, table rendering and continue/quit prompt

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use life_engine::{Grid, Snapshot};
use tracing::warn;

const CLEAR_LINES: usize = 30;

/// Whitespace-separated token reader over a prompt/response pair of streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self { input, output, pending: VecDeque::new(), clear_screen }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Asks for every cell in row-major order, re-asking until each answer is `1` or `0`.
    pub fn read_seed(&mut self, width: usize, height: usize) -> Result<Vec<bool>> {
        let len = Grid::check_dimensions(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                cells.push(self.prompt_cell(x, y)?);
                writeln!(self.output)?;
            }
        }
        Ok(cells)
    }

    fn prompt_cell(&mut self, x: usize, y: usize) -> Result<bool> {
        loop {
            write!(self.output, "Please enter data for cell {x},{y}. (1 = alive, 0 = dead): ")?;
            self.output.flush()?;

            let token = self
                .next_token()
                .context("failed to read seed input")?;
            match token.as_deref() {
                Some("1") => return Ok(true),
                Some("0") => return Ok(false),
                Some(other) => {
                    warn!(x, y, token = other, "rejected seed token");
                    writeln!(self.output, "\nERROR, unknown data entered.")?;
                }
                None => bail!("input ended before cell {x},{y} was entered"),
            }
        }
    }

    /// Clears the screen (unless disabled) and prints the generation grid.
    pub fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", "\n".repeat(CLEAR_LINES))?;
        }
        write!(self.output, "{snapshot}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn report_generation(&mut self, generation: u64, cycle_period: Option<u64>) -> Result<()> {
        write!(self.output, "\nGENERATION: {generation}")?;
        if let Some(period) = cycle_period {
            write!(self.output, " (repeats with period {period})")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// `false` when the operator enters `q` or input ends; any other answer continues.
    pub fn ask_continue(&mut self) -> Result<bool> {
        write!(self.output, "Enter 'q' to quit or 'c' to continue: ")?;
        self.output.flush()?;
        let token = self.next_token().context("failed to read continue/quit answer")?;
        writeln!(self.output)?;
        Ok(!matches!(token.as_deref(), None | Some("q")))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
