//! Page widgets: the particle canvas host, the hero typewriter, the header
//! menu, and the assistant launcher + panel.

pub mod assistant_panel;
pub mod menu;
pub mod particle_host;
pub mod typewriter;
