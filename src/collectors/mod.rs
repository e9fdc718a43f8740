pub mod mounts;
pub mod statfs;
