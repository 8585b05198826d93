//! Headless replay of scripted grid interactions.
//!
//! A fixture carries the grid's columns, rows and configuration together
//! with a list of events. Replaying it drives a [`datagrid::Grid`] the way
//! a UI would and reports the snapshots and host callbacks it produced.

pub mod error;
pub mod fixture;
pub mod host;
pub mod paths;
pub mod replay;
pub mod script;

pub use error::ReplayError;
pub use fixture::Fixture;
pub use host::{HostEvent, ReplayHost};
pub use replay::{Replay, Report, run};
pub use script::Event;
