pub mod care;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod particles;
pub mod scheduler;
pub mod session;
pub mod spawner;
pub mod storage;
pub mod vitals;
