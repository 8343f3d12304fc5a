pub mod button;
pub mod card;
pub mod form;
pub mod modal;
pub mod text;
