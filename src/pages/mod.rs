//! Pages
//!
//! One component per client route.

mod editor;
mod home;
mod legal_notice;
mod login;
mod recipe;
mod register;

pub use editor::EditorPage;
pub use home::HomePage;
pub use legal_notice::LegalNoticePage;
pub use login::LoginPage;
pub use recipe::RecipePage;
pub use register::RegisterPage;
