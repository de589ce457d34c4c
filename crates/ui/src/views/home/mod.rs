mod card;
mod modal;
mod stats_panel;
mod toast;
mod view;

pub use view::{HomeView, OpenRequest};

#[cfg(test)]
pub(crate) use view::HomeTestHandles;
