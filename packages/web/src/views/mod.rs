mod login;
pub use login::Login;

mod main_page;
pub use main_page::MainPage;
