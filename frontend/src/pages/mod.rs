pub mod features;
pub mod footer;
pub mod hero;
pub mod modals;
pub mod problem;
pub mod registration;
pub mod security_perimeter;
pub mod sovereignty;
