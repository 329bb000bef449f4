pub mod common;

mod admin_tests;
mod notification_tests;
