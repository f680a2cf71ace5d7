// SPDX-License-Identifier: MPL-2.0
//! Lookup result rendering.
//!
//! # Components
//!
//! - [`renderer`] - `Renderer` turning lookup outcomes into fragments and notifications
//! - [`fragment`] - Display-ready summary, vulnerability and service sections
//! - [`panel`] - `ResultsPanel` holding placed fragments and the loading state
//! - [`escape`] - Angle-bracket escaping for service banners
//! - [`view`] - Skeleton and fragment cards

pub mod escape;
pub mod fragment;
pub mod panel;
pub mod renderer;
pub mod view;

pub use fragment::{Field, Fragment};
pub use panel::{ResultsPanel, RESULTS_CONTAINER};
pub use renderer::{RenderOutcome, Renderer};
pub use view::Message as ResultsMessage;
