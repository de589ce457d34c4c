mod home;

pub use home::{HomeView, OpenRequest};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
