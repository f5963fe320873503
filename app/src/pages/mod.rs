mod create;
mod home;
mod not_found;

pub use create::Create;
pub use home::Home;
pub use not_found::NotFound;
