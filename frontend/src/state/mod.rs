pub mod modal;
pub mod scroll;
pub mod view;

pub use modal::{ModalController, ModalId};
pub use scroll::{BodyScrollLock, ScrollLock, ScrollSuspension};
pub use view::{Anchor, FeatureTab, ScrollRequest, View, ViewAction, ViewState};
