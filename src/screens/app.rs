//! Line-driven interactive mode.
//!
//! Keys: `h` home, `t` timesheet, `p`/`n` previous/next month, a day number
//! to open it, `b` back, `c` clock in/out, `?` help, `q` quit.

use super::detail::render_detail;
use super::home::HomeScreen;
use super::navigation::{Navigator, Screen};
use super::timesheet::TimesheetScreen;
use crate::api::AccessLayer;
use crate::errors::AppResult;
use crate::location::Locator;
use crate::models::user::User;
use crate::store::ClockStore;
use crate::utils::date::today;
use chrono::Datelike;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "[h] home  [t] timesheet  [p/n] prev/next month  [1..] open day  [b] back  [c] clock  [q] quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Home,
    Timesheet,
    PreviousMonth,
    NextMonth,
    Open(usize),
    Back,
    Clock,
    Help,
    Quit,
    Unknown(String),
}

/// `None` for blank lines.
pub fn parse_input(line: &str) -> Option<Input> {
    let cmd = line.trim().to_lowercase();
    if cmd.is_empty() {
        return None;
    }
    let input = match cmd.as_str() {
        "h" | "home" => Input::Home,
        "t" | "timesheet" => Input::Timesheet,
        "p" | "prev" => Input::PreviousMonth,
        "n" | "next" => Input::NextMonth,
        "b" | "back" => Input::Back,
        "c" | "clock" => Input::Clock,
        "?" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other => match other.parse::<usize>() {
            Ok(n) => Input::Open(n),
            Err(_) => Input::Unknown(other.to_string()),
        },
    };
    Some(input)
}

pub struct App<S: ClockStore, L: Locator + Sync> {
    api: AccessLayer<S>,
    locator: L,
    location_timeout: Duration,
    nav: Navigator,
    home: HomeScreen,
    sheet: Option<TimesheetScreen>,
    notice: Option<String>,
}

impl<S: ClockStore, L: Locator + Sync> App<S, L> {
    /// Build the app on the home screen with a fresh status.
    pub async fn start(
        api: AccessLayer<S>,
        user: User,
        locator: L,
        location_timeout: Duration,
    ) -> Self {
        let mut app = Self {
            api,
            locator,
            location_timeout,
            nav: Navigator::new(),
            home: HomeScreen::new(user),
            sheet: None,
            notice: None,
        };
        if let Err(e) = app.home.refresh(&app.api).await {
            app.notice = Some(e.to_string());
        }
        app
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn timesheet(&self) -> Option<&TimesheetScreen> {
        self.sheet.as_ref()
    }

    /// Apply one input. Failures are kept as a notice for the next render and
    /// leave the current state untouched. Returns false on quit.
    pub async fn handle(&mut self, input: Input) -> bool {
        self.notice = None;
        match self.apply(input).await {
            Ok(keep_going) => keep_going,
            Err(e) => {
                tracing::warn!(error = %e, "screen action failed");
                self.notice = Some(e.to_string());
                true
            }
        }
    }

    async fn apply(&mut self, input: Input) -> AppResult<bool> {
        match input {
            Input::Quit => return Ok(false),
            Input::Help => self.notice = Some(HELP.to_string()),
            Input::Unknown(cmd) => self.notice = Some(format!("Unknown command '{}'. {}", cmd, HELP)),
            Input::Home => {
                self.nav.go_home();
                self.home.refresh(&self.api).await?;
            }
            Input::Timesheet => {
                let now = today();
                let mut sheet = TimesheetScreen::new(self.home.user().id, now.year(), now.month());
                sheet.load(&self.api).await?;
                self.nav.open_timesheet(now.year(), now.month());
                self.sheet = Some(sheet);
            }
            Input::PreviousMonth => self.page(-1).await?,
            Input::NextMonth => self.page(1).await?,
            Input::Open(n) => {
                if !matches!(self.nav.current(), Screen::Timesheet { .. }) {
                    self.notice = Some("Open the timesheet first.".into());
                    return Ok(true);
                }
                match self.sheet.as_ref().and_then(|s| s.day(n)).cloned() {
                    Some(day) => {
                        self.nav.open_detail(day);
                    }
                    None => self.notice = Some(format!("No day number {} in this month.", n)),
                }
            }
            Input::Back => {
                if !self.nav.back() {
                    self.notice = Some("Already at the top screen.".into());
                }
            }
            Input::Clock => {
                if !matches!(self.nav.current(), Screen::Home) {
                    self.notice = Some("Clock actions are available on the home screen.".into());
                    return Ok(true);
                }
                let ev = self
                    .home
                    .clock_action(&self.api, &self.locator, self.location_timeout)
                    .await?;
                self.notice = Some(format!(
                    "{} recorded at {} ({})",
                    ev.kind.label(),
                    ev.time_hm(),
                    ev.location.display_short()
                ));
            }
        }
        Ok(true)
    }

    async fn page(&mut self, offset: i32) -> AppResult<()> {
        if !matches!(self.nav.current(), Screen::Timesheet { .. }) {
            self.notice = Some("Month paging is only available on the timesheet.".into());
            return Ok(());
        }
        if let Some(current) = &self.sheet {
            let mut sheet = current.clone();
            sheet.shift(offset);
            sheet.load(&self.api).await?;
            self.nav.set_month(sheet.year(), sheet.month());
            self.sheet = Some(sheet);
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut out = match self.nav.current() {
            Screen::Home => self.home.render(),
            Screen::Timesheet { .. } => self
                .sheet
                .as_ref()
                .map(|s| s.render())
                .unwrap_or_default(),
            Screen::Detail { day } => render_detail(Some(&**day)),
        };
        if let Some(notice) = &self.notice {
            out.push_str(&format!("\n» {}\n", notice));
        }
        out
    }
}

/// Drive `app` from `input` until `q` or end of input, writing every
/// rendered screen to `out`.
pub async fn run_app<S, L, R, W>(app: &mut App<S, L>, input: R, out: &mut W) -> AppResult<()>
where
    S: ClockStore,
    L: Locator + Sync,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}\n{}", app.render(), HELP)?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(cmd) = parse_input(&line) else {
            continue;
        };
        if !app.handle(cmd).await {
            break;
        }
        writeln!(out, "\n{}", app.render())?;
        out.flush()?;
    }

    Ok(())
}
