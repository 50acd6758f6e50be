//! Storefront view models and per-visitor state.

pub mod audio;
pub mod bag;
pub mod controls;
pub mod gallery;
pub mod hero;
pub mod session;

pub use bag::{Bag, BagItem};
pub use controls::{ProductLinks, ProductQuery, Selection};
pub use gallery::{Gallery, SwipeDirection};
pub use hero::{HeroConfig, HeroForm};
