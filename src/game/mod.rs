//! The game state machine.
//!
//! - `state`: tagged [`GameState`] and the pure per-question transitions
//! - `session`: [`Session`], the owner of state; exposes the player commands
//! - `scheduler`: deferred resolutions on virtual time, keyed by session token
//! - `snapshot`: read-only presentation view
//! - `event`: notifications for the host

pub mod event;
pub mod scheduler;
pub mod session;
pub mod snapshot;
pub mod state;

pub use event::SessionEvent;
pub use scheduler::{Deferred, ScheduledTask, Scheduler, SessionToken, TaskId};
pub use session::Session;
pub use snapshot::{FriendView, LifelineView, OptionView, QuestionView, Reveal, RungView, Snapshot, Status};
pub use state::{GameState, Round};
