//! `D3DCOLOR` helpers

/// Packed ARGB color as used by Direct3D 9 and the rMod console
pub type D3dColor = u32;

/// Equivalent of the `D3DCOLOR_ARGB` macro
pub const fn d3dcolor_argb(a: u8, r: u8, g: u8, b: u8) -> D3dColor {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        assert_eq!(d3dcolor_argb(255, 175, 255, 0), 0xFFAF_FF00);
        assert_eq!(d3dcolor_argb(0, 0, 0, 0), 0);
        assert_eq!(d3dcolor_argb(1, 2, 3, 4), 0x0102_0304);
    }
}
