//! Controller layer: UI actions, view transitions, and dispatch into the windrose session.

pub mod events;
pub mod orchestration;
