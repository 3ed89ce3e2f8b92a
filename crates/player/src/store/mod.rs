//! Client state: the view model and the store that owns it

mod state;
mod values;

pub use state::{Store, Subscription};
pub use values::StoreValues;
