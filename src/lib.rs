//! # jsonschema2avro
//!
//! Store [JSON Schema](https://json-schema.org/) documents by type and
//! version, validate JSON instances against them, and derive
//! [Apache Avro](https://avro.apache.org/) schemas from them.
//!
//! ## Translation rules
//!
//! - `object` (or no `type`) → `record`; properties outside `required`
//!   become `["null", T]` with a `null` default
//! - `array` → `array` of its `items` (named `<name>Item`), or of `string`
//! - `string` with `enum` → `enum` named after its field
//! - `string` with `format` `date` / `date-time` → `long`
//! - `integer` → `int`, `number` → `double`, `boolean`, `null`
//! - anything else → `string`
//!
//! Translation never fails on well-formed JSON; only unparseable text is an
//! error.
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use jsonschema2avro::converter::AvroConverter;
//!
//! let schema = r#"{
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer" }
//!     },
//!     "required": ["name"]
//! }"#;
//!
//! let avsc = AvroConverter::new().convert_str(schema, "User").unwrap();
//! assert!(avsc.contains("\"name\": \"User\""));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! jsonschema2avro convert user.json user.avsc
//! jsonschema2avro register --type user --version 1.0 user.json
//! jsonschema2avro validate --type user --version 1.0 instance.json
//! jsonschema2avro avro --type user --version 1.0
//! ```
//!
//! ## Crate Layout
//!
//! - [`avro`] — Avro type definitions (`AvroType`, `AvroField`)
//! - [`common`] — Name sanitising and fingerprinting
//! - [`converter`] — JSON Schema → Avro conversion logic
//! - [`registry`] — Schema storage, validation, and Avro derivation
//! - [`error`] — Error types
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod avro;
pub mod common;
pub mod converter;
pub mod error;
pub mod registry;

pub use avro::{AvroField, AvroType, Primitive};
pub use converter::AvroConverter;
pub use error::{ConvertFileError, RegistryError, TranslateError};
