use crate::models::day_group::DayGroup;

/// Bottom-bar destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Timesheet,
}

/// A screen together with the state it needs to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Timesheet { year: i32, month: u32 },
    /// A day opened from the timesheet below it on the stack.
    Detail { day: Box<DayGroup> },
}

impl Screen {
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Home => Tab::Home,
            Screen::Timesheet { .. } | Screen::Detail { .. } => Tab::Timesheet,
        }
    }
}

/// Navigation stack. The bottom element is the root of the current tab and
/// is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }

    pub fn current(&self) -> &Screen {
        // the stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn go_home(&mut self) {
        self.stack = vec![Screen::Home];
    }

    /// Switch to the timesheet tab showing `year`/`month`.
    pub fn open_timesheet(&mut self, year: i32, month: u32) {
        self.stack = vec![Screen::Timesheet { year, month }];
    }

    /// Replace the month of the timesheet on top of the stack.
    /// Returns false when the timesheet is not the current screen.
    pub fn set_month(&mut self, year: i32, month: u32) -> bool {
        match self.stack.last_mut() {
            Some(Screen::Timesheet { year: y, month: m }) => {
                *y = year;
                *m = month;
                true
            }
            _ => false,
        }
    }

    /// Push the detail of `day`; only valid from the timesheet.
    pub fn open_detail(&mut self, day: DayGroup) -> bool {
        if !matches!(self.current(), Screen::Timesheet { .. }) {
            return false;
        }
        self.stack.push(Screen::Detail { day: Box::new(day) });
        true
    }

    /// Pop one screen. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}
