pub mod backup;
pub mod grouping;
pub mod import;
pub mod log;
