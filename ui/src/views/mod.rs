mod home;
pub use home::Home;

mod ignis;
pub use ignis::Ignis;
