pub mod icons;

pub use icons::{CloseIcon, MenuIcon};
