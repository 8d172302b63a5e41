pub mod build;
pub mod contact;
pub mod init;
pub mod page;
pub mod quiz;
pub mod routes;
pub mod validate;
