use crate::api::AccessLayer;
use crate::errors::{AppError, AppResult};
use crate::location::{Locator, capture};
use crate::models::event::ClockEvent;
use crate::models::event_type::EventKind;
use crate::models::user::User;
use crate::store::ClockStore;
use crate::utils::colors::{RESET, color_for_status};
use std::time::Duration;

/// Status and punch button.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    user: User,
    last: Option<ClockEvent>,
    message: Option<String>,
}

impl HomeScreen {
    pub fn new(user: User) -> Self {
        Self {
            user,
            last: None,
            message: None,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn last_event(&self) -> Option<&ClockEvent> {
        self.last.as_ref()
    }

    /// Error from the last clock action, shown once under the button.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_in_service(&self) -> bool {
        self.last.as_ref().is_some_and(|e| e.kind.is_in())
    }

    /// Kind the button will record.
    pub fn next_kind(&self) -> EventKind {
        self.last
            .as_ref()
            .map_or(EventKind::In, |e| e.kind.toggled())
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_in_service() {
            "CLOCK OUT"
        } else {
            "CLOCK IN"
        }
    }

    pub async fn refresh<S: ClockStore>(&mut self, api: &AccessLayer<S>) -> AppResult<()> {
        self.last = api.most_recent_event(self.user.id).await?;
        Ok(())
    }

    /// Capture a fix, record the toggled punch, then refresh the status.
    ///
    /// `&mut self` is held for the whole cycle, so a second action cannot
    /// start until this one settles. On failure the status is left as it was
    /// and the message is kept for the next render. A recorded punch whose
    /// status refresh fails still counts: the status falls back to it and
    /// the message says so.
    pub async fn clock_action<S: ClockStore, L: Locator + Sync>(
        &mut self,
        api: &AccessLayer<S>,
        locator: &L,
        timeout: Duration,
    ) -> AppResult<ClockEvent> {
        self.message = None;
        let kind = self.next_kind();
        let user_id = self.user.id;

        let result = match capture(locator, timeout).await {
            Ok(location) => api.record_event(user_id, kind, location).await,
            Err(e) => Err(AppError::from(e)),
        };

        match result {
            Ok(ev) => {
                if let Err(e) = self.refresh(api).await {
                    tracing::warn!(error = %e, id = ev.id, "status refresh after punch failed");
                    self.last = Some(ev.clone());
                    self.message = Some(format!(
                        "{} recorded, but the status could not be refreshed: {}",
                        ev.kind.label(),
                        e
                    ));
                }
                Ok(ev)
            }
            Err(e) => {
                self.message = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn render(&self) -> String {
        let in_service = self.is_in_service();
        let status = if in_service {
            "In service"
        } else {
            "Not in service"
        };

        let mut out = String::new();
        out.push_str(&format!("Hello, {}\n", self.user.name));
        out.push_str("Welcome to GeoTimbra\n\n");
        out.push_str("Current status:\n");
        out.push_str(&format!(
            "  {}{}{}\n",
            color_for_status(in_service),
            status,
            RESET
        ));

        if let Some(last) = &self.last {
            out.push_str(&format!(
                "Last punch: {} at {}\n",
                last.kind.label(),
                last.time_hm()
            ));
        }

        out.push_str(&format!("\n[ {} ]\n", self.button_label()));

        if let Some(msg) = &self.message {
            out.push_str(&format!("\n{}\n", msg));
        }

        out
    }
}
