#![doc(html_root_url = "https://docs.rs/lending-autocomplete/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod candidates;
mod config;
pub mod decorator;
mod error;
pub mod filter;
mod listener;
pub mod page;
pub mod popup;

pub use config::Config;
pub use decorator::{Decoration, Presentation};
pub use error::{Error, Result};
pub use popup::{PopupListController, PopupState};
