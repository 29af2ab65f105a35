use super::key_handler::{Input, KeyHandler};
use crate::component::{App, AppProps, Component};
use crate::error::Result;
use crate::view::{ComponentViewModel, View};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use tracing::{debug, info};

/// Result of handling one input event
#[derive(Debug, PartialEq)]
pub enum Transition {
    Stay,
    Quit,
}

pub struct AppController {
    app: App,
    view: View,
}

impl AppController {
    pub fn new(props: AppProps) -> Self {
        let app = App::new(props);
        info!(
            initial_count = app.counter().count(),
            empty_list = app.list().is_empty(),
            "mounting app"
        );
        Self {
            app,
            view: View::new(),
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let result = self.run_loop();

        // Restore the terminal even if the loop failed
        let restored = Self::restore_terminal();
        info!(
            count = self.app.counter().count(),
            items = self.app.list().len(),
            "quit"
        );

        result.and(restored)
    }

    fn restore_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            let view_model = ComponentViewModel::new(&self.app);
            if self.view.needs_render(&view_model) {
                self.view.render(&view_model)?;
            }

            let input = match event::read()? {
                Event::Key(key_event) => KeyHandler::handle_key(key_event),
                Event::Mouse(mouse_event) => KeyHandler::handle_mouse(mouse_event),
                Event::Resize(_, _) => Input::Redraw,
                _ => Input::Ignore,
            };

            if self.apply_input(input) == Transition::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Route one input to the components or the view
    pub fn apply_input(&mut self, input: Input) -> Transition {
        match input {
            Input::Dispatch(action) => {
                self.app.dispatch(action);
                Transition::Stay
            }
            Input::Click { row, column } => {
                match self.view.hit_test(row, column) {
                    Some(action) => {
                        self.app.dispatch(action);
                    }
                    None => debug!(row, column, "click outside any control"),
                }
                Transition::Stay
            }
            Input::Redraw => {
                self.view.invalidate();
                Transition::Stay
            }
            Input::Quit => Transition::Quit,
            Input::Ignore => Transition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Action;

    fn controller() -> AppController {
        AppController::new(AppProps::default())
    }

    #[test]
    fn test_dispatch_increments() {
        let mut c = controller();
        for _ in 0..5 {
            assert_eq!(c.apply_input(Input::Dispatch(Action::Increment)), Transition::Stay);
        }
        assert_eq!(c.app.counter().count(), 6);
    }

    #[test]
    fn test_click_on_button_increments() {
        let mut c = controller();
        let lines = c.app.render();
        c.view.update_hit_map(&lines, 80, 24);

        // Row 2 is "1 [+]"; the button spans columns 2..5
        c.apply_input(Input::Click { row: 2, column: 3 });
        assert_eq!(c.app.counter().count(), 2);

        c.apply_input(Input::Click { row: 2, column: 0 });
        c.apply_input(Input::Click { row: 0, column: 3 });
        assert_eq!(c.app.counter().count(), 2);
    }

    #[test]
    fn test_click_before_first_render_does_nothing() {
        let mut c = controller();
        c.apply_input(Input::Click { row: 2, column: 3 });
        assert_eq!(c.app.counter().count(), 1);
    }

    #[test]
    fn test_default_mount_has_empty_list() {
        let c = controller();
        assert!(c.app.list().is_empty());
        assert_eq!(c.app.counter().revision(), 0);
    }

    #[test]
    fn test_quit_and_ignore() {
        let mut c = controller();
        assert_eq!(c.apply_input(Input::Ignore), Transition::Stay);
        assert_eq!(c.apply_input(Input::Redraw), Transition::Stay);
        assert_eq!(c.apply_input(Input::Quit), Transition::Quit);
        assert_eq!(c.app.counter().count(), 1);
    }
}
