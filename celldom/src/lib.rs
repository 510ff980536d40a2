pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod text;
pub mod text_selection;
pub mod transition;

pub use document::Document;
pub use element::{find_element, Content, Element};
pub use event::{CopyEvent, Key, Modifiers, MouseButton, PointerEvent};
pub use focus::FocusState;
pub use geometry::Rect;
pub use hit::{hit_test, hit_test_any, hit_test_draggable};
pub use layout::GeometryMap;
pub use text_selection::{SelectionPoint, TextSelection};
pub use transition::{Easing, TransitionConfig};
