//! Line-window speed reading engine.
//!
//! The crate lays a flat word sequence out into fixed-width display lines,
//! keeps a scrolling window of those lines consistent while the word store is
//! edited by hyphenation, and paces a reading cursor through the focus line.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod app;
pub mod content;
pub mod input;
pub mod layout;
pub mod metrics;
pub mod pager;
pub mod playback;
pub mod render;
pub mod session;
pub mod text_policy;
