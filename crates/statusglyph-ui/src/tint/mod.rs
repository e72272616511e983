//! Theme colors and the dark-icon tint of the status bar.
//!
//! Every themed element is a [`Channel`] holding a committed `base`, the
//! `old` color a cross-fade starts from and the `tint` currently shown.
//! [`TintTransitionCoordinator`] owns all channels, runs one cross-fade per
//! channel plus a shared dark-intensity animation, and holds dark changes
//! back while an app transition is pending.

mod channel;
mod config;
mod coordinator;

pub use channel::{Channel, ChannelColors, ChannelGroup, TintChannel};
pub use config::TintConfig;
pub use coordinator::{TintTransitionCoordinator, TransitionDeferral};
