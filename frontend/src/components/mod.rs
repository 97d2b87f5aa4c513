mod card;
mod menu;
mod section;

pub use card::*;
pub use menu::*;
pub use section::*;
