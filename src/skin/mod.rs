//! Skins for drawing the card board.
//!
//! Two skins consume the same [`VisualParams`](crate::VisualParams):
//! - `GlyphSkin` - rank text and suit symbol
//! - `PictorialSkin` - card pictures, dimmed by filters when inactive

mod traits;
mod panel;
mod glyph;
mod pictorial;
mod dispatch;

pub use traits::Skin;
pub use panel::{GlyphFace, ImageFilter, PictureFace, SuitHeader, SuitPanel, Tile, TileFace};
pub use glyph::GlyphSkin;
pub use pictorial::PictorialSkin;
pub use dispatch::SkinKind;
