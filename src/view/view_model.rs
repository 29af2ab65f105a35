//! View Model - Abstracts component output for the view layer

use crate::component::{Action, Component};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Subheading,
    Body,
    Hint,
}

/// A span of columns on one line that triggers an action when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub start_col: usize,
    pub end_col: usize,
    pub action: Action,
}

impl HitRegion {
    pub fn contains(&self, column: usize) -> bool {
        column >= self.start_col && column < self.end_col
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
    pub hit: Option<HitRegion>,
}

impl Line {
    fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            hit: None,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Heading)
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Subheading)
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Body)
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Hint)
    }

    pub fn blank() -> Self {
        Self::body(String::new())
    }

    pub fn with_hit(mut self, hit: HitRegion) -> Self {
        self.hit = Some(hit);
        self
    }
}

/// The ViewModel trait provides everything the view needs to render
pub trait ViewModel {
    /// Lines to display, top to bottom
    fn get_lines(&self) -> Vec<Line>;

    /// Changes whenever the displayed state has been replaced
    fn get_revision(&self) -> u64;
}

/// Adapts any component to ViewModel
pub struct ComponentViewModel<'a> {
    component: &'a dyn Component,
}

impl<'a> ComponentViewModel<'a> {
    pub fn new(component: &'a dyn Component) -> Self {
        Self { component }
    }
}

impl<'a> ViewModel for ComponentViewModel<'a> {
    fn get_lines(&self) -> Vec<Line> {
        self.component.render()
    }

    fn get_revision(&self) -> u64 {
        self.component.revision()
    }
}
