pub mod catalog;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod filter;
pub mod nav;
pub mod particles;
pub mod scroll;
pub mod theme;

pub use catalog::*;
pub use config::*;
pub use contact::*;
pub use filter::*;
pub use nav::*;
pub use particles::*;
pub use scroll::*;
pub use theme::*;
