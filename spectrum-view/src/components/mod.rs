pub mod content;
pub mod footer;
pub mod foundation;
pub mod header;

pub use content::Content;
pub use footer::Footer;
pub use foundation::{container, render_slotted};
pub use header::Header;
