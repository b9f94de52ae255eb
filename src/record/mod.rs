//! Record Model Module
//!
//! Defines the metadata record the catalog stores and everything needed to
//! interpret one: the closed set of searchable fields, the extractor mapping
//! a field to the record values indexed under it, and the validator turning
//! raw YAML bytes into a typed record.
//!
//! ## Submodules
//! - **`types`**: The record and maintainer structs plus the `SearchField`
//!   enum with its wire names.
//! - **`validate`**: YAML decoding and field-level validation producing a
//!   structured list of offending fields.

pub mod types;
pub mod validate;
