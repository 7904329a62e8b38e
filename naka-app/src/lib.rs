//! Desktop front end for the Petit Naka restaurant chain.
//!
//! Six routed pages behind a navbar, a gesture-driven wheel carousel
//! on the carte, and a persisted restaurant selection. Bundled data
//! and its validation live in the `naka-model` crate.

pub mod app;
pub mod carousel;
pub mod config;
pub mod message;
pub mod routing;
pub mod seo;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod transitions;
pub mod update;
pub mod view;
pub mod views;
