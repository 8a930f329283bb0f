mod counter;
mod health;
mod mapping;
mod redirect;

pub use counter::{counter_handler, save_handler};
pub use health::health_handler;
pub use mapping::{create_from_form, create_from_query};
pub use redirect::redirect_handler;
