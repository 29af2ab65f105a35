use super::view_model::{HitRegion, Line, LineStyle, ViewModel};
use crate::component::Action;
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType, size},
};
use std::io::{self, Write, stdout};
use tracing::trace;
use unicode_width::UnicodeWidthChar;

pub struct View {
    last_lines: Vec<String>,
    last_terminal_size: (u16, u16),
    last_revision: Option<u64>,
    needs_full_redraw: bool,
    render_count: usize,
    hit_map: Vec<(usize, HitRegion)>,
}

impl View {
    pub fn new() -> Self {
        Self {
            last_lines: Vec::new(),
            last_terminal_size: (0, 0),
            last_revision: None,
            needs_full_redraw: true,
            render_count: 0,
            hit_map: Vec::new(),
        }
    }

    /// Force the next render to redraw every line
    pub fn invalidate(&mut self) {
        self.needs_full_redraw = true;
    }

    /// True if the state was replaced or the screen must be redrawn
    pub fn needs_render(&self, view_model: &dyn ViewModel) -> bool {
        self.needs_full_redraw || self.last_revision != Some(view_model.get_revision())
    }

    /// Action under the given screen cell, if any
    pub fn hit_test(&self, row: u16, column: u16) -> Option<Action> {
        self.hit_map
            .iter()
            .find(|(hit_row, hit)| *hit_row == row as usize && hit.contains(column as usize))
            .map(|(_, hit)| hit.action)
    }

    /// Record where the clickable controls of `lines` land on screen
    pub fn update_hit_map(&mut self, lines: &[Line], width: usize, height: usize) {
        self.hit_map = hit_regions(lines, width, height);
    }

    fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))
    }

    fn move_cursor(&self, line: usize, column: usize) -> io::Result<()> {
        execute!(stdout(), cursor::MoveTo(column as u16, line as u16))
    }

    pub fn render(&mut self, view_model: &dyn ViewModel) -> io::Result<()> {
        let (width, height) = size()?;
        let lines = view_model.get_lines();

        self.render_count += 1;

        let current_size = (width, height);
        if self.last_terminal_size != current_size {
            self.needs_full_redraw = true;
            self.last_terminal_size = current_size;
        }

        if self.needs_full_redraw {
            self.clear_screen()?;
            self.needs_full_redraw = false;
            self.last_lines.clear();
        }

        let visible = layout(&lines, width as usize, height as usize);
        let styled: Vec<String> = visible
            .iter()
            .zip(&lines)
            .map(|(text, line)| style_line(text, line.style))
            .collect();

        if self.last_lines != styled {
            // Only redraw changed lines
            for (i, line) in styled.iter().enumerate() {
                if i >= self.last_lines.len() || self.last_lines[i] != *line {
                    self.move_cursor(i, 0)?;
                    execute!(stdout(), Clear(ClearType::CurrentLine))?;
                    print!("{line}");
                }
            }

            // Clear any extra lines if the new content is shorter
            for i in styled.len()..self.last_lines.len() {
                self.move_cursor(i, 0)?;
                execute!(stdout(), Clear(ClearType::CurrentLine))?;
            }

            self.last_lines = styled;
        }

        self.update_hit_map(&lines, width as usize, height as usize);
        self.last_revision = Some(view_model.get_revision());
        trace!(render = self.render_count, "frame drawn");

        stdout().flush()
    }
}

/// Clip lines to the visible area, measuring width in terminal cells
pub fn layout(lines: &[Line], width: usize, height: usize) -> Vec<String> {
    lines
        .iter()
        .take(height)
        .map(|line| clip_to_width(&line.text, width))
        .collect()
}

/// Hit regions in screen coordinates, cut to the visible area
pub fn hit_regions(lines: &[Line], width: usize, height: usize) -> Vec<(usize, HitRegion)> {
    lines
        .iter()
        .take(height)
        .enumerate()
        .filter_map(|(row, line)| {
            let hit = line.hit?;
            if hit.start_col >= width {
                return None;
            }
            Some((
                row,
                HitRegion {
                    end_col: hit.end_col.min(width),
                    ..hit
                },
            ))
        })
        .collect()
}

fn clip_to_width(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        result.push(ch);
    }

    result
}

fn style_line(text: &str, style: LineStyle) -> String {
    match style {
        LineStyle::Heading => format!(
            "{}{}{text}{}",
            SetAttribute(Attribute::Bold),
            SetAttribute(Attribute::Underlined),
            SetAttribute(Attribute::Reset)
        ),
        LineStyle::Subheading => format!(
            "{}{text}{}",
            SetAttribute(Attribute::Italic),
            SetAttribute(Attribute::Reset)
        ),
        LineStyle::Hint => format!(
            "{}{text}{}",
            SetForegroundColor(Color::DarkGrey),
            SetAttribute(Attribute::Reset)
        ),
        LineStyle::Body => text.to_string(),
    }
}
