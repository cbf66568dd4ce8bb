//! Core password functionality
//! 
//! This module contains the cryptographic building blocks and the
//! encode/verify operations built on them.

pub mod crypto;
