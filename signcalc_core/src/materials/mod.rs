//! # Materials
//!
//! Steel pole sections and material grades. Sections come from a
//! [`SectionProvider`]; the built-in [`SectionCatalog`] covers common
//! square HSS and standard pipe sizes.

pub mod steel;

pub use steel::{
    builtin_catalog, PoleSection, SectionCatalog, SectionChoice, SectionFamily, SectionProvider,
    SteelGrade,
};
