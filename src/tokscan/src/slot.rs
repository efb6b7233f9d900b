// tokscan/src/slot.rs

//! Typed destination slots.
//!
//! A destination is any caller-owned place that can be filled from a token.
//! Every `T: FromStr` qualifies, so `String`, integers, floats, `bool` and
//! `char` all work without extra glue.

use std::any;
use std::fmt;
use std::str::FromStr;

/// A caller-owned slot that receives one token.
pub trait Destination {
    /// Name of the type this slot expects, used in conversion errors.
    fn type_name(&self) -> &'static str;

    /// Convert `token` and store it. On failure the slot keeps its old value
    /// and the conversion failure is described in the returned message.
    fn fill(&mut self, token: &str) -> Result<(), String>;
}

impl<T> Destination for T
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn type_name(&self) -> &'static str {
        short_type_name(any::type_name::<T>())
    }

    fn fill(&mut self, token: &str) -> Result<(), String> {
        *self = token.parse::<T>().map_err(|e| e.to_string())?;
        Ok(())
    }
}

/// `alloc::string::String` -> `String`; generic names are left alone.
fn short_type_name(full: &'static str) -> &'static str {
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}
