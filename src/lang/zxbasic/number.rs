//! Hidden numbers
//!
//! After the digits of every numeric literal the Spectrum stores the marker `0x0E` and a
//! 5 byte binary form of the value, which is what the interpreter actually uses.
//! Only small integers are packed here.  Anything else gets five zeros, which is what
//! existing tools produce, so that the output stays byte compatible with them.

pub const HIDDEN_NUMBER_MARKER: u8 = 0x0e;
pub const HIDDEN_NUMBER_LEN: usize = 5;

/// Pack `value` into the 5 byte form, integers in -65535..=65535 are exact, everything else is zeroed.
pub fn pack(value: f64) -> [u8;HIDDEN_NUMBER_LEN] {
    if value.fract()==0.0 && value >= -65535.0 && value <= 65535.0 {
        let sign = match value < 0.0 {
            true => 0xff,
            false => 0x00
        };
        let bytes = u16::to_le_bytes(value.abs() as u16);
        return [0x00,sign,bytes[0],bytes[1],0x00];
    }
    [0;HIDDEN_NUMBER_LEN]
}

#[cfg(test)]
mod tests {
    use super::pack;

    #[test]
    fn small_integers() {
        assert_eq!(pack(42.0),[0x00,0x00,0x2a,0x00,0x00]);
        assert_eq!(pack(-42.0),[0x00,0xff,0x2a,0x00,0x00]);
        assert_eq!(pack(0.0),[0;5]);
        assert_eq!(pack(-0.0),[0;5]);
        assert_eq!(pack(1000.0),[0x00,0x00,0xe8,0x03,0x00]);
    }
    #[test]
    fn range_limits() {
        assert_eq!(pack(65535.0),[0x00,0x00,0xff,0xff,0x00]);
        assert_eq!(pack(-65535.0),[0x00,0xff,0xff,0xff,0x00]);
        assert_eq!(pack(65536.0),[0;5]);
        assert_eq!(pack(-65536.0),[0;5]);
    }
    #[test]
    fn lossy_fallback() {
        assert_eq!(pack(3.14),[0;5]);
        assert_eq!(pack(0.5),[0;5]);
        assert_eq!(pack(f64::NAN),[0;5]);
        assert_eq!(pack(f64::INFINITY),[0;5]);
    }
}
