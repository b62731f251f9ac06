// Inline style and stylesheet text for the pile. Pure string building so it
// can be tested on the host.

use pile_core::constants::{MOBILE_BREAKPOINT_PX, TABLET_BREAKPOINT_PX};
use pile_core::{PhotoSlot, ResponsiveWidths, SliderSpec};

pub const PHOTO_CLASS: &str = "pile-photo";

/// Inline style for one photo wrapper. The polaroid inside reads `--rotation`.
pub fn photo_style(slot: &PhotoSlot, z_index: i64, delay_ms: f64) -> String {
    format!(
        "top:{}%;left:{}%;z-index:{};animation-delay:{}ms;--rotation:{}deg;--aspect:{}",
        slot.top, slot.left, z_index, delay_ms, slot.rotation_deg, slot.aspect
    )
}

/// Responsive width rules: mobile first, then tablet and desktop breakpoints.
pub fn width_stylesheet(widths: &ResponsiveWidths) -> String {
    let mobile_px = MOBILE_BREAKPOINT_PX;
    let tablet_px = TABLET_BREAKPOINT_PX;
    format!(
        ".{PHOTO_CLASS} {{ width: {}%; }}\n\
         @media (min-width: {mobile_px}px) {{ .{PHOTO_CLASS} {{ width: {}%; }} }}\n\
         @media (min-width: {tablet_px}px) {{ .{PHOTO_CLASS} {{ width: {}%; }} }}",
        widths.mobile, widths.tablet, widths.desktop
    )
}

#[inline]
pub fn pile_height_style(height_vh: f64) -> String {
    format!("height:{height_vh}vh")
}

/// Slider track fill, exposed as a CSS custom property.
#[inline]
pub fn slider_fill_style(spec: &SliderSpec, value: f64) -> String {
    format!("--fill:{}%", spec.fill_percent(value))
}
