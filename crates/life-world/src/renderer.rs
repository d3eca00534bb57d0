//! Renderer interface and a plain-text implementation.

use crate::grid::Grid;
use life_core::Result;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Consumer of one read-only generation at a time.
///
/// Display, pacing and screen handling belong to the implementation; the
/// grid is only ever lent out immutably.
pub trait Renderer {
    fn render(&mut self, generation: u64, grid: &Grid) -> Result<()>;
}

/// Writes each generation as rows of `0`/`1` separated by spaces
pub struct TextRenderer<W: Write> {
    out: W,
    clear_screen: bool,
    show_generation: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: false,
            show_generation: false,
        }
    }

    /// Prefix every frame with an ANSI clear-screen sequence
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Print `Generation N` above each frame
    pub fn with_generation_header(mut self, show: bool) -> Self {
        self.show_generation = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, generation: u64, grid: &Grid) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        if self.show_generation {
            writeln!(self.out, "Generation {}", generation)?;
        }
        write!(self.out, "{}", grid)?;
        if !self.clear_screen {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
