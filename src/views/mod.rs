//! # Views
//!
//! Server-side HTML rendering for the single address-check page. Every
//! function here is a pure function of its arguments; interpolated text is
//! always passed through [`escape_html`].

mod footer;
pub use footer::*;

mod html;
pub use html::*;

mod page;
pub use page::*;

mod result;
pub use result::*;

mod styles;
