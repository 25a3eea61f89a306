//! Main module for dedent functionality

pub mod error;
pub mod input;
mod patterns;
pub mod survey;
pub mod template;
pub mod transform;
