//! Presentation: the three screens, the navigation stack and the
//! interactive loop that drives them. Screens render to plain `String`s so
//! that both the one-shot commands and the interactive app can print them.

pub mod app;
pub mod detail;
pub mod home;
pub mod navigation;
pub mod timesheet;
