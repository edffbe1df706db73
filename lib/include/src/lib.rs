#![no_std]

pub mod errno;
