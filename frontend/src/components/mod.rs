pub mod custom_cursor;
pub mod modal;
pub mod navbar;
pub mod pointer;
pub mod spotlight_card;
pub mod star_field;
pub mod tilt_card;
