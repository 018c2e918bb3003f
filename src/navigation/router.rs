use super::{NavigateMode, Navigator, Route, RouteTable};
use std::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    index: usize,
}

/// In-memory browser-style history over the site's route table.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    history: Mutex<History>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self::starting_at(table, "/")
    }

    pub fn starting_at(table: RouteTable, path: &str) -> Self {
        Self {
            table,
            history: Mutex::new(History {
                entries: vec![path.to_string()],
                index: 0,
            }),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current_path(&self) -> String {
        let history = self
            .history
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        history.entries[history.index].clone()
    }

    pub fn current(&self) -> Route {
        self.table.resolve(&self.current_path())
    }

    /// Entries up to and including the current one.
    pub fn entries(&self) -> Vec<String> {
        let history = self
            .history
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        history.entries[..=history.index].to_vec()
    }

    pub fn push(&self, path: &str) -> Route {
        {
            let mut history = self
                .history
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let next = history.index + 1;
            history.entries.truncate(next);
            history.entries.push(path.to_string());
            history.index = next;
        }
        self.arrive(path)
    }

    pub fn replace(&self, path: &str) -> Route {
        {
            let mut history = self
                .history
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let index = history.index;
            history.entries[index] = path.to_string();
        }
        self.arrive(path)
    }

    /// Step back one entry. Returns `None` at the start of history.
    pub fn back(&self) -> Option<Route> {
        let path = {
            let mut history = self
                .history
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if history.index == 0 {
                return None;
            }
            history.index -= 1;
            history.entries[history.index].clone()
        };
        Some(self.table.resolve(&path))
    }

    fn arrive(&self, path: &str) -> Route {
        let route = self.table.resolve(path);
        if let Route::NotFound(missing) = &route {
            warn!(path = %missing, "no route matches");
        } else {
            debug!(path, %route, "navigated");
        }
        route
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str, mode: NavigateMode) {
        match mode {
            NavigateMode::Push => self.push(path),
            NavigateMode::Replace => self.replace(path),
        };
    }
}
