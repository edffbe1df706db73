//! global configs for the signal subsystem
//! provides constants for kernel config
//! [`signal`] contains configs for signal delivery

#![no_std]

pub mod signal;
