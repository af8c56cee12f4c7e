pub mod client;
pub mod course;
pub mod creds;
pub mod error;
pub mod exercise;
pub mod pacing;
pub mod services;
pub mod submission;
pub mod types;

mod util;
