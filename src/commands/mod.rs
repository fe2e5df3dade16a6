//! CLI commands for graphroute

pub mod dispatch;
pub mod helpers;
pub mod load;
pub mod route;
pub mod show;
pub mod suggest;
pub mod traverse;
