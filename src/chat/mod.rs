pub mod backend;
pub mod directive;
pub mod fallback;
pub mod transcript;
pub mod widget;

pub use backend::{ChatBackend, HttpChatBackend, ReplyFuture};
pub use directive::{ParsedDirective, ParsedReply, contains_directive, parse_reply};
pub use fallback::offline_reply;
pub use transcript::{ChatMessage, Sender, Transcript};
pub use widget::{ChatWidget, InputOrigin, SUGGESTIONS, Suggestion, TurnOutcome};
