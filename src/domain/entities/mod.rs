//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Affiliate`] - A partner whose traffic is tracked
//! - [`Campaign`] - A marketing campaign clicks are attributed to
//! - [`Click`] - A recorded ad click, unique per (affiliate, token)
//! - [`Conversion`] - A transaction attributed to a prior click
//!
//! Creation inputs use separate `New*` structs; `*With*` structs are
//! read-model rows annotated for the dashboard (campaign name, original
//! click token).

pub mod affiliate;
pub mod campaign;
pub mod click;
pub mod conversion;

pub use affiliate::Affiliate;
pub use campaign::Campaign;
pub use click::{Click, ClickWithCampaign, NewClick};
pub use conversion::{Conversion, ConversionWithClick, NewConversion};
