//! Shared plumbing for the portfolio workspace.
//!
//! Every other crate depends on this one for [`ErrorLocation`], the call-site
//! stamp carried by all error variants.

pub mod error;

pub use error::error_location::ErrorLocation;

#[cfg(test)]
mod tests;
