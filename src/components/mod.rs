//! Reusable UI chrome shared by pages.

pub mod layout;
pub mod modal;
