//! Stateless building blocks shared by the pages.

mod button;
mod panel;
mod pill;

pub use button::{Button, ButtonVariant};
pub use panel::{Panel, PanelContent, PanelHeader, PanelTitle};
pub use pill::{Pill, PillVariant};
