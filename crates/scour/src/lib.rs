//! Sanitizers for untrusted text.
//!
//! # Scope
//!
//! This crate implements:
//! - **Allow-list HTML sanitizer** ([`sanitize_html`], [`Sanitizer`])
//!   - Tags and attributes outside an [`AllowList`] are dropped
//!   - Script-like elements are skipped together with their content
//!   - `javascript:` and `data:` URLs remove the tag carrying them
//!   - `href` must be site-relative, `http(s)://` or `mailto://`
//! - **Plain-text stripper** ([`strip_html`])
//! - **Name and path normalizers** ([`normalize_name`], [`normalize_path`])
//!   for ASCII file names and URL slugs
//! - **Accent folding** ([`fold_accents`]) through a fixed table
//!
//! # Not Implemented
//!
//! - Tag balancing; the output is as well-formed as the input
//! - Nested unsafe elements of the same name (one skip slot, no stack)
//! - CSS sanitizing; `style` is simply not allowed by default

/// Accent folding.
pub mod accents;
/// Lexical path cleaning, as used by the normalizers.
pub mod path;
/// Allow-list configuration.
pub mod policy;
/// The allow-list HTML sanitizer.
pub mod sanitize;

mod normalize;
mod strip;

pub use accents::fold_accents;
pub use normalize::{normalize_name, normalize_path};
pub use policy::{AllowList, DEFAULT_ATTRIBUTES, DEFAULT_TAGS, UNSAFE_TAGS};
pub use sanitize::{Sanitizer, clean_attributes, sanitize_html, sanitize_html_allowing};
pub use scour_html::TokenizeError;
pub use strip::strip_html;
