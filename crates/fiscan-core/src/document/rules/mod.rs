//! Field-format rules for Brazilian fiscal codes.

pub mod cest;
pub mod cfop;
pub mod ncm;
pub mod patterns;

pub use cest::{CEST_NOT_INFORMED, format_cest, is_valid_cest, normalize_cest};
pub use cfop::{SINGLE_STAGE_CFOPS, is_single_stage, is_valid_cfop};
pub use ncm::{format_ncm, is_valid_ncm};
