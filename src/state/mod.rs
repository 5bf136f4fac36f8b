pub mod nav;
pub mod scroll;

pub use nav::{scroll_target, AnchorMap, SectionAnchor, SectionNavigator};
pub use scroll::{ScrollAnimation, ScrollObserver};
