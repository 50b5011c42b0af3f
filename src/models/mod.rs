pub mod activity;
pub mod events;
pub mod message;
pub mod signup;
