use embedded_graphics::geometry::Point;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::SimulatorEvent;

/// Unified pointer/keyboard input. Mouse and touch both arrive through the
/// simulator as pointer events, so the dashboard only deals in this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardInput {
    PointerMoved(Point),
    PointerPressed(Point),
    PointerReleased(Point),
    StartShortcut,
    CalibrateShortcut,
    DebugToggle,
    Quit,
}

pub fn map_event(event: SimulatorEvent) -> Option<DashboardInput> {
    match event {
        SimulatorEvent::Quit => Some(DashboardInput::Quit),
        SimulatorEvent::KeyUp { keycode, .. } => match keycode {
            Keycode::S => Some(DashboardInput::StartShortcut),
            Keycode::C => Some(DashboardInput::CalibrateShortcut),
            Keycode::D => Some(DashboardInput::DebugToggle),
            Keycode::Escape => Some(DashboardInput::Quit),
            _ => None,
        },
        SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(DashboardInput::PointerPressed(point)),
        SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(DashboardInput::PointerReleased(point)),
        SimulatorEvent::MouseMove { point } => Some(DashboardInput::PointerMoved(point)),
        _ => None,
    }
}
