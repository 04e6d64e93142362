pub mod clock;
pub mod config;
pub mod directory;
pub mod edit_log;
pub mod history;
pub mod init;
pub mod leave;
pub mod login;
pub mod matrix;
pub mod report;
