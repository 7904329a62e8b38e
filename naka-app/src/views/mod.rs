//! Per-route pages and shared view components.

pub mod a_emporter;
pub mod carte;
pub mod components;
pub mod contact;
pub mod decor;
pub mod histoire;
pub mod home;
pub mod layout;
pub mod opening_hours;
pub mod reservation;
pub mod restaurant_modal;
pub mod wheel;
