//! Frame rendering.
//!
//! Each refresh is composed into one [`OutputBuffer`] by the [`FrameCompositor`] and handed to
//! the terminal as a single blob, so a partially drawn frame is never visible.

pub mod frame;
pub mod output;
pub mod theme;

pub use frame::{FrameCompositor, FrameContext};
pub use output::OutputBuffer;
pub use theme::ColorTheme;
