//! Event sources: the boundary to the host windowing system.
//!
//! A source only reports raw layout changes (visible frame plus full window size).
//! It MUST NOT classify frames or touch the height cache; that is the job of
//! KeyboardHeightTracker, driven through KeyboardHeightProvider.

mod dry_run;
mod scripted;
mod r#trait;

pub use self::dry_run::DryRunEventSource;
pub use self::r#trait::{create_event_source, LayoutEventSource};
pub use self::scripted::{ScriptedEventSource, ScriptedFrame};
