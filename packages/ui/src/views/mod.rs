mod main_page;
pub use main_page::MainPageView;
