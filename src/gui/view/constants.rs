//! View constants (layout/sizing).

pub(crate) const HEADER_TEXT: f32 = 14.0;
pub(crate) const ROW_TEXT: f32 = 14.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;

pub(crate) const ROW_H: f32 = 26.0;
pub(crate) const ROW_VPAD: f32 = 2.0;
pub(crate) const ROW_HPAD: f32 = 8.0;
pub(crate) const LIST_SPACING: f32 = 1.0;

pub(crate) const MARKER_W: f32 = 24.0;
pub(crate) const TITLE_W: f32 = 320.0;
pub(crate) const ARTIST_W: f32 = 200.0;
pub(crate) const GENRE_W: f32 = 120.0;

pub(crate) const LABEL_W: f32 = 70.0;
pub(crate) const VOLUME_W: f32 = 220.0;
