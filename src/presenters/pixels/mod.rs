#[cfg(any(feature = "gui", test))]
pub mod overlay;
#[cfg(feature = "gui")]
pub mod presenter;
