pub mod outcome;
pub mod process_form;
pub mod shared;
