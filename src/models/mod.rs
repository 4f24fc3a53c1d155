pub mod day_group;
pub mod event;
pub mod event_type;
pub mod location;
pub mod user;
