pub mod humanize;
pub mod names;
