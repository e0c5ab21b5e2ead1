use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickChannel {
    Movement,
    Altitude,
}

impl StickChannel {
    pub fn name(&self) -> &'static str {
        match self {
            StickChannel::Movement => "movement",
            StickChannel::Altitude => "altitude",
        }
    }
}

/// Top-left offset of the thumb such that it stays fully inside the pad.
pub fn clamp_thumb_offset(pointer: Point, pad: Rectangle, thumb: Size) -> Point {
    let max_x = pad.size.width.saturating_sub(thumb.width) as i32;
    let max_y = pad.size.height.saturating_sub(thumb.height) as i32;

    let x = pointer.x - pad.top_left.x - thumb.width as i32 / 2;
    let y = pointer.y - pad.top_left.y - thumb.height as i32 / 2;

    Point::new(x.clamp(0, max_x), y.clamp(0, max_y))
}

pub struct Joystick {
    channel: StickChannel,
    pad: Rectangle,
    thumb: Size,
    offset: Point,
}

impl Joystick {
    pub fn new(channel: StickChannel, pad: Rectangle, thumb: Size) -> Self {
        let travel = Self::travel_of(pad, thumb);
        Self {
            channel,
            pad,
            thumb,
            offset: Point::new(travel.x / 2, travel.y / 2),
        }
    }

    pub fn channel(&self) -> StickChannel {
        self.channel
    }

    pub fn pad(&self) -> Rectangle {
        self.pad
    }

    pub fn thumb(&self) -> Size {
        self.thumb
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn contains(&self, pointer: Point) -> bool {
        self.pad.contains(pointer)
    }

    pub fn point_to(&mut self, pointer: Point) -> Point {
        self.offset = clamp_thumb_offset(pointer, self.pad, self.thumb);
        self.offset
    }

    /// Normalized deflection in [-1, 1] per axis, (0, 0) at pad center.
    /// Screen convention: +x right, +y down.
    pub fn axes(&self) -> (f32, f32) {
        let travel = Self::travel_of(self.pad, self.thumb);
        (
            Self::axis(self.offset.x, travel.x),
            Self::axis(self.offset.y, travel.y),
        )
    }

    fn axis(offset: i32, travel: i32) -> f32 {
        if travel == 0 {
            return 0.0;
        }
        (2.0 * offset as f32 / travel as f32 - 1.0).clamp(-1.0, 1.0)
    }

    fn travel_of(pad: Rectangle, thumb: Size) -> Point {
        Point::new(
            pad.size.width.saturating_sub(thumb.width) as i32,
            pad.size.height.saturating_sub(thumb.height) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad() -> Rectangle {
        Rectangle::new(Point::new(40, 60), Size::new(128, 128))
    }

    const THUMB: Size = Size::new(36, 36);

    #[test]
    fn offset_stays_inside_pad_for_any_pointer() {
        let pad = pad();
        let max_x = (pad.size.width - THUMB.width) as i32;
        let max_y = (pad.size.height - THUMB.height) as i32;

        for x in (-100..300).step_by(7) {
            for y in (-100..300).step_by(7) {
                let offset = clamp_thumb_offset(Point::new(x, y), pad, THUMB);
                assert!(offset.x >= 0 && offset.x <= max_x, "x out of range: {:?}", offset);
                assert!(offset.y >= 0 && offset.y <= max_y, "y out of range: {:?}", offset);
            }
        }
    }

    #[test]
    fn pointer_at_top_left_plus_half_thumb_is_origin() {
        let pad = pad();
        let pointer = pad.top_left + Point::new(THUMB.width as i32 / 2, THUMB.height as i32 / 2);
        assert_eq!(clamp_thumb_offset(pointer, pad, THUMB), Point::zero());
    }

    #[test]
    fn pointer_at_bottom_right_minus_half_thumb_is_max() {
        let pad = pad();
        let pointer = pad.top_left
            + Point::new(
                pad.size.width as i32 - THUMB.width as i32 / 2,
                pad.size.height as i32 - THUMB.height as i32 / 2,
            );
        assert_eq!(
            clamp_thumb_offset(pointer, pad, THUMB),
            Point::new(
                (pad.size.width - THUMB.width) as i32,
                (pad.size.height - THUMB.height) as i32
            )
        );
    }

    #[test]
    fn thumb_larger_than_pad_pins_to_origin() {
        let pad = Rectangle::new(Point::zero(), Size::new(20, 20));
        let offset = clamp_thumb_offset(Point::new(500, 500), pad, Size::new(40, 40));
        assert_eq!(offset, Point::zero());
    }

    #[test]
    fn new_stick_rests_centered_with_zero_axes() {
        let stick = Joystick::new(StickChannel::Movement, pad(), THUMB);
        assert_eq!(stick.offset(), Point::new(46, 46));
        assert_eq!(stick.axes(), (0.0, 0.0));
    }

    #[test]
    fn full_deflection_reaches_unit_axes() {
        let mut stick = Joystick::new(StickChannel::Altitude, pad(), THUMB);

        stick.point_to(Point::new(10_000, 10_000));
        assert_eq!(stick.axes(), (1.0, 1.0));

        stick.point_to(Point::new(-10_000, -10_000));
        assert_eq!(stick.axes(), (-1.0, -1.0));
    }

    #[test]
    fn contains_matches_pad_bounds() {
        let stick = Joystick::new(StickChannel::Movement, pad(), THUMB);
        assert!(stick.contains(Point::new(40, 60)));
        assert!(stick.contains(Point::new(167, 187)));
        assert!(!stick.contains(Point::new(168, 187)));
        assert!(!stick.contains(Point::new(39, 60)));
    }
}
