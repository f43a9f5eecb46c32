#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod utils;
pub(crate) use utils::{Window, helper};

mod error;
pub use error::{FeatureError, Result};

pub mod series;

mod slope_r2_product;
pub use slope_r2_product::{RegressionFit, SlopeR2Product};

mod rolling_slope_r2;
pub use rolling_slope_r2::RollingSlopeR2;
