//! Persistence core for the Chime alarm clock.
//!
//! A streaming tag-structured document writer with a matching reader, and
//! the two stores built on them: the alarm settings document and the
//! recent-file history. The GUI shell, timezone enumeration, and audio
//! playback are external collaborators; this crate only persists and
//! restores their state.
//!
//! Layers:
//! - [`domain`]: document model, writer, reader (pure, no I/O)
//! - [`application`]: the [`AlarmSettings`] and [`RecentList`] stores
//! - [`infrastructure`]: line-preserving reads, atomic file replacement
//! - [`cli`]: the `chimecfg` inspection/editing tool

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{
    AlarmSettings, ApplicationError, ApplicationResult, RecentList, DEFAULT_CAPACITY,
};
pub use domain::{parse, DocumentError, DocumentResult, DocumentWriter, Entity, Node};
