//! Technology-neutral visual encodings for derived views.
//!
//! Nothing here draws; it only names colors and icons so any rendering
//! surface can map them to its own widgets.

pub mod encoding;
pub mod primitives;

pub use encoding::{
    CategoryEncoding, ColorClass, EMOTION_FALLBACK_COLOR, IconKind, PosEncoding, VisualEncoding,
    emotion_color, entity_encoding, pos_encoding,
};
pub use primitives::{Color, HslColor};
