use core::fmt::Debug;

use ufmt::{uWrite, uwrite};

pub fn write_percent<E: Debug, W: uWrite<Error = E>>(s: &mut W, percent: u8) {
    uwrite!(s, "{}%", percent).unwrap();
}

/// Writes a normalized axis value as e.g. "+0.43" or "-1.00".
pub fn write_axis<E: Debug, W: uWrite<Error = E>>(s: &mut W, value: f32) {
    let value = if value > 1.0 {
        1.0
    } else if value < -1.0 {
        -1.0
    } else {
        value
    };

    let sign = if value < 0.0 { "-" } else { "+" };
    let hundredths = (if value < 0.0 { -value } else { value } * 100.0) as u32;
    let int = hundredths / 100;
    let frac = hundredths % 100;

    uwrite!(s, "{}{}.", sign, int).unwrap();
    if frac < 10 {
        uwrite!(s, "0").unwrap();
    }
    uwrite!(s, "{}", frac).unwrap();
}

#[cfg(test)]
mod tests {
    use heapless::String;

    use super::*;

    #[test]
    fn percent_strings_cover_the_battery_range() {
        for percent in 0..100u8 {
            let mut s = String::<8>::default();
            write_percent(&mut s, percent);
            assert!(s.ends_with('%'));
            let digits = &s[..s.len() - 1];
            assert_eq!(digits.parse::<u8>(), Ok(percent));
        }
    }

    #[test]
    fn axis_values_render_with_two_decimals() {
        let cases = [
            (0.0, "+0.00"),
            (1.0, "+1.00"),
            (-1.0, "-1.00"),
            (0.43, "+0.43"),
            (-0.05, "-0.05"),
            (7.0, "+1.00"),
        ];
        for (value, expected) in cases.iter() {
            let mut s = String::<8>::default();
            write_axis(&mut s, *value);
            assert_eq!(&s[..], *expected);
        }
    }
}
