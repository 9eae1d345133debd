//! UI screens.

mod app;
mod form;
mod login_screen;
mod main_screen;
mod registration_screen;
mod splash_screen;

pub use app::App;
pub use form::{FormAction, FormFocus, FormView};
pub use login_screen::LoginScreen;
pub use main_screen::MainScreen;
pub use registration_screen::RegistrationScreen;
pub use splash_screen::SplashScreen;
