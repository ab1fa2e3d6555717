//! Route handlers organized by resource
//!
//! Page handlers answer with a JSON view model; every view carries the
//! pending flash messages under `flashes`.

pub mod comments;
pub mod dashboard;
pub mod fms;
pub mod health;
pub mod likes;
pub mod posts;
