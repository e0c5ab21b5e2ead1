use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Where each dashboard element sits on the display. The render loop and the
/// input routing both read from the same layout, so a rectangle that is
/// wrong here is wrong everywhere at once; `validate` rejects it at startup.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub status_origin: Point,
    pub battery_origin: Point,
    pub start_button: Rectangle,
    pub calibrate_button: Rectangle,
    pub movement_pad: Rectangle,
    pub altitude_pad: Rectangle,
    pub thumb: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    OutsideDisplay(&'static str),
    ThumbTooLarge(&'static str),
    Overlap(&'static str, &'static str),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::OutsideDisplay(name) => {
                write!(f, "{} does not fit on the display", name)
            }
            LayoutError::ThumbTooLarge(name) => {
                write!(f, "thumb does not fit inside {}", name)
            }
            LayoutError::Overlap(a, b) => write!(f, "{} overlaps {}", a, b),
        }
    }
}

impl Layout {
    pub fn validate(&self, display: Size) -> Result<(), LayoutError> {
        let regions = self.interactive_regions();

        for (name, rect) in regions.iter().copied() {
            if !fits(&rect, display) {
                return Err(LayoutError::OutsideDisplay(name));
            }
        }

        for (name, pad) in [
            ("the movement pad", self.movement_pad),
            ("the altitude pad", self.altitude_pad),
        ] {
            if self.thumb.width > pad.size.width || self.thumb.height > pad.size.height {
                return Err(LayoutError::ThumbTooLarge(name));
            }
        }

        for (i, (name_a, a)) in regions.iter().enumerate() {
            for (name_b, b) in regions.iter().skip(i + 1) {
                if overlaps(a, b) {
                    return Err(LayoutError::Overlap(*name_a, *name_b));
                }
            }
        }

        Ok(())
    }

    fn interactive_regions(&self) -> [(&'static str, Rectangle); 4] {
        [
            ("the start button", self.start_button),
            ("the calibrate button", self.calibrate_button),
            ("the movement pad", self.movement_pad),
            ("the altitude pad", self.altitude_pad),
        ]
    }
}

fn fits(rect: &Rectangle, display: Size) -> bool {
    rect.top_left.x >= 0
        && rect.top_left.y >= 0
        && rect.top_left.x + rect.size.width as i32 <= display.width as i32
        && rect.top_left.y + rect.size.height as i32 <= display.height as i32
}

fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    let shared = a.intersection(b);
    shared.size.width > 0 && shared.size.height > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            status_origin: Point::new(240, 10),
            battery_origin: Point::new(388, 10),
            start_button: Rectangle::new(Point::new(24, 56), Size::new(120, 44)),
            calibrate_button: Rectangle::new(Point::new(24, 116), Size::new(120, 44)),
            movement_pad: Rectangle::new(Point::new(176, 136), Size::new(128, 128)),
            altitude_pad: Rectangle::new(Point::new(332, 136), Size::new(128, 128)),
            thumb: Size::new(36, 36),
        }
    }

    const DISPLAY: Size = Size::new(480, 320);

    #[test]
    fn reference_layout_is_valid() {
        assert_eq!(layout().validate(DISPLAY), Ok(()));
    }

    #[test]
    fn pad_outside_display_is_rejected() {
        let mut bad = layout();
        bad.altitude_pad = Rectangle::new(Point::new(400, 136), Size::new(128, 128));
        assert_eq!(
            bad.validate(DISPLAY),
            Err(LayoutError::OutsideDisplay("the altitude pad"))
        );
    }

    #[test]
    fn negative_origin_is_rejected() {
        let mut bad = layout();
        bad.start_button = Rectangle::new(Point::new(-4, 56), Size::new(120, 44));
        assert_eq!(
            bad.validate(DISPLAY),
            Err(LayoutError::OutsideDisplay("the start button"))
        );
    }

    #[test]
    fn oversized_thumb_is_rejected() {
        let mut bad = layout();
        bad.thumb = Size::new(200, 36);
        assert_eq!(
            bad.validate(DISPLAY),
            Err(LayoutError::ThumbTooLarge("the movement pad"))
        );
    }

    #[test]
    fn overlapping_regions_are_rejected() {
        let mut bad = layout();
        bad.calibrate_button = Rectangle::new(Point::new(24, 80), Size::new(120, 44));
        assert_eq!(
            bad.validate(DISPLAY),
            Err(LayoutError::Overlap(
                "the start button",
                "the calibrate button"
            ))
        );
    }
}
