//! Canon Core - Button component and the markup it renders to.
//!
//! This crate provides:
//!
//! - **Markup**: a small element/text tree with class lists, attributes and
//!   click handlers, plus queries and an HTML serializer
//! - **Button**: style-variant resolution (`action`, `primary`, `secondary`,
//!   `link`, `login` and the `cog`/`delete`/`edit`/`plus` icon buttons)
//! - **Host**: the mount/unmount/dispatch interface a runtime provides, and
//!   an in-memory implementation used for simulated events
//!
//! # Example
//!
//! ```rust
//! use canon_core::{Button, ButtonProps, CanonStyle, Event, Host, MemoryHost};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//!
//! let button = Button::render(
//!     ButtonProps::new()
//!         .id("save")
//!         .canon_style(CanonStyle::Primary)
//!         .on_click(move || counter.set(counter.get() + 1))
//!         .text("Save"),
//! );
//!
//! let mut host = MemoryHost::new();
//! let handle = host.mount(button.into());
//! host.dispatch_event(handle, Event::Click).unwrap();
//! assert_eq!(clicks.get(), 1);
//! ```

pub mod button;
pub mod host;
pub mod markup;

// Re-export commonly used types
pub use button::{Button, ButtonProps, CanonStyle, BASE_CLASS, DISABLED_CLASS, HIDDEN_CLASS};
pub use host::{DispatchOutcome, Event, Host, MemoryHost, MountHandle};
pub use markup::{to_html, to_html_pretty, Attributes, ClassList, ClickHandler, Element, Node};

/// Error types for canon-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown mount handle: {0}")]
    UnknownHandle(MountHandle),

    #[error("Invalid node path: {0:?}")]
    InvalidPath(Vec<usize>),
}

/// Result type for canon-core operations.
pub type Result<T> = std::result::Result<T, Error>;
