//! Client-side routing: the site's route table, an in-memory history, and
//! the [`Navigator`] capability handed to the session guard and chat widget.

mod router;
mod routes;

pub use router::Router;
pub use routes::{AdminPage, Route, RouteTable};

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateMode {
    /// Append a new entry; `back` returns to the current one.
    Push,
    /// Overwrite the current entry so it is not reachable via `back`.
    Replace,
}

/// Anything that can move the client to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str, mode: NavigateMode);
}
