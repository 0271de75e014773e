//! # ERP Order Candidate
//!
//! 訂單候選（Order Line Candidate）相關的值物件

pub mod bpartner;

pub use bpartner::{OLCandBPartnerInfo, OLCandBPartnerInfoBuilder};
