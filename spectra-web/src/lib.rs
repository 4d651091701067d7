//! spectra-web - SpectraFlow browser frontend
//!
//! `App` owns the search session and the favourites store; everything under
//! `components` is a pure view fed by props and callbacks.

pub mod api;
mod app;
pub mod components;
pub mod storage;

pub use app::App;
