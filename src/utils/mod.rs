pub mod email_index;
pub mod join_code;
