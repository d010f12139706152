//! Domain layer - Tag rewriting rules

pub mod codeblock;
pub mod image;
pub mod language;
pub mod rewriter;

pub use codeblock::{convert_codeblock_tags, resolve_language, CodeblockRewriter};
pub use image::{convert_image_tags, preview_image_conversions, Conversion, ImageRewriter};
pub use rewriter::{Rewrite, TagRewriter};
