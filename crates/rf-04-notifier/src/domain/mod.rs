//! Domain module for the Notifier

pub mod notice;

pub use notice::{BannerKind, ContactAlternatives, Notice, NotifierView};
