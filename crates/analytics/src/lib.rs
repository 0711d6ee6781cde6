//! # Return Engine
//!
//! This crate turns raw adjusted close histories into aligned daily returns and
//! the CAPM statistics shown on the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It performs no I/O and knows
//!   nothing about market-data providers or how results are rendered.
//! - **Stateless Calculation:** Every operation is a function of its inputs. The
//!   `ReturnEngine` only sequences those functions for one recomputation pass.
//! - **Insufficiency is a value:** Too little data is reported through
//!   `AnalyticsError::InsufficientData`, never through a panic or a NaN that
//!   leaks into a rendered figure.
//!
//! ## Public API
//!
//! - `daily_returns`, `align`: price-to-return preparation.
//! - `compute_beta`, `annualize_arithmetic`, `annualize_geometric`,
//!   `capm_expected_return`: the statistics.
//! - `moving_average`: display-only trailing smoothing.
//! - `ReturnEngine` / `CapmResult` / `AnalyticsError`.

pub mod engine;
pub mod error;
pub mod report;
pub mod returns;
pub mod smoothing;
pub mod stats;

pub use engine::ReturnEngine;
pub use error::AnalyticsError;
pub use report::CapmResult;
pub use returns::{align, daily_returns};
pub use smoothing::moving_average;
pub use stats::{
    TRADING_DAYS_PER_YEAR, annualize_arithmetic, annualize_geometric, capm_expected_return,
    compute_beta,
};
