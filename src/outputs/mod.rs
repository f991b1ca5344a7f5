//! Output writers for a finished run.
//!
//! # Submodules
//!
//! - [`html`]: Writes the host page with the rendered container, or prints
//!   the container content when no output path is given
//! - [`json`]: Writes the rendered previews as a JSON array
//!
//! # Output Structure
//!
//! ```text
//! --output public/index.html       # host page, container filled in
//! --json-output public/previews.json
//! ```

pub mod html;
pub mod json;
