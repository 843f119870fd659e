pub mod application;
pub mod checks;
pub mod daily;
pub mod finding;
pub mod record_key;
pub mod table;
pub mod work_type;
