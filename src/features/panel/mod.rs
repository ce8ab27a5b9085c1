pub mod debounce;
pub mod state;
pub mod view;

pub use debounce::{Debouncer, EDIT_DEBOUNCE};
pub use state::{Direction, Lang, PanelState};
pub use view::{EntryView, PanelView};
