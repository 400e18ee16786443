//! `arkade system install <app>` commands.
pub mod firecracker;
