pub mod auth;
pub mod guard;
pub mod probe;

pub use auth::AdminAuth;
pub use guard::{GuardView, Liveness, SessionGuard, SessionStatus};
pub use probe::{HttpIdentityProbe, IdentityProbe, ProbeFuture};
