mod client;
mod error;

pub use client::{DashboardApi, HttpDashboardApi, DEFAULT_EMAIL_LIMIT};
pub use error::ApiError;
