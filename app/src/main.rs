use core::convert::Infallible;
use core::fmt::Write;
use std::time::Duration;

use app_controls::{DashboardController, Joystick, StickChannel};
use app_ui::{BootScreen, DashboardScreen, DebugScreen, Screen, Screens};
use embedded_graphics::primitives::ContainsPoint;

mod clock;
mod display;
mod input;

use clock::StdClock;
use display::Display;
use input::DashboardInput;

type Controller = DashboardController<StdClock>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = config::LAYOUT;
    let mut display = Display::new(config::DISPLAY_SIZE, config::WINDOW_TITLE);

    if let Err(err) = layout.validate(config::DISPLAY_SIZE) {
        log::error!("invalid dashboard layout: {}", err);

        let mut message = heapless::String::<256>::default();
        let _ = write!(message, "{}", err);
        app_ui::draw_fault_screen(&mut display, &message);
        display.flush();

        // Keep the diagnostic on screen until the window is closed.
        loop {
            for event in display.poll_events() {
                if input::map_event(event) == Some(DashboardInput::Quit) {
                    std::process::exit(1);
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }

    let battery_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);

    let mut controller: Controller = DashboardController::new(
        config::TIMINGS,
        Joystick::new(StickChannel::Movement, layout.movement_pad, layout.thumb),
        Joystick::new(StickChannel::Altitude, layout.altitude_pad, layout.thumb),
        battery_seed,
    );

    let mut screen: Screens<Display, Infallible> = BootScreen::default().into();
    screen.draw_init(&mut display).await;
    display.flush();
    tokio::time::sleep(Duration::from_millis(config::BOOT_SPLASH_MS)).await;

    let mut debug_mode = false;
    let mut start_active = false;
    let mut calibrate_active = false;

    screen = DashboardScreen::new(layout).into();
    if let Screens::Dashboard(dashboard) = &mut screen {
        sync_dashboard(dashboard, &controller, start_active, calibrate_active);
    }
    screen.draw_init(&mut display).await;
    display.flush();

    'outer: loop {
        controller.tick();

        match &mut screen {
            Screens::Dashboard(dashboard) => {
                sync_dashboard(dashboard, &controller, start_active, calibrate_active);
            }
            Screens::Debug(debug) => sync_debug(debug, &controller),
            Screens::Boot(_) => {}
        }
        screen.draw_frame(&mut display).await;
        display.flush();

        for event in display.poll_events() {
            match input::map_event(event) {
                Some(DashboardInput::Quit) => break 'outer,
                Some(DashboardInput::StartShortcut) => controller.start_pressed(),
                Some(DashboardInput::CalibrateShortcut) => controller.calibrate_pressed(),
                Some(DashboardInput::DebugToggle) => {
                    debug_mode = !debug_mode;
                    screen = if debug_mode {
                        DebugScreen::default().into()
                    } else {
                        DashboardScreen::new(layout).into()
                    };
                    match &mut screen {
                        Screens::Dashboard(dashboard) => {
                            sync_dashboard(dashboard, &controller, start_active, calibrate_active);
                        }
                        Screens::Debug(debug) => sync_debug(debug, &controller),
                        Screens::Boot(_) => {}
                    }
                    screen.draw_init(&mut display).await;
                    display.flush();
                }
                Some(DashboardInput::PointerPressed(point)) => {
                    if layout.start_button.contains(point) {
                        controller.start_pressed();
                        start_active = true;
                    } else if layout.calibrate_button.contains(point) {
                        controller.calibrate_pressed();
                        calibrate_active = true;
                    } else {
                        controller.pointer_moved(point);
                    }
                }
                Some(DashboardInput::PointerReleased(_)) => {
                    start_active = false;
                    calibrate_active = false;
                }
                Some(DashboardInput::PointerMoved(point)) => {
                    controller.pointer_moved(point);
                }
                None => {}
            }
        }

        tokio::time::sleep(Duration::from_millis(config::FRAME_TIME_MS)).await;
    }
}

fn sync_dashboard(
    screen: &mut DashboardScreen<Display, Infallible>,
    controller: &Controller,
    start_active: bool,
    calibrate_active: bool,
) {
    screen.status = controller.status();
    screen.battery = controller.battery_level();
    screen.calibration_progress = controller.calibration_progress();
    screen.start_active = start_active;
    screen.calibrate_active = calibrate_active;
    screen.movement_offset = controller.stick(StickChannel::Movement).offset();
    screen.altitude_offset = controller.stick(StickChannel::Altitude).offset();
}

fn sync_debug(screen: &mut DebugScreen<Display, Infallible>, controller: &Controller) {
    screen.frame = controller.control_frame();
    screen.movement_offset = controller.stick(StickChannel::Movement).offset();
    screen.altitude_offset = controller.stick(StickChannel::Altitude).offset();
    screen.battery = controller.battery_level();
}
