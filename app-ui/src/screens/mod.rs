mod boot;
mod dashboard;
mod debug;

use core::fmt::Debug;

pub use boot::BootScreen;
pub use dashboard::DashboardScreen;
pub use debug::DebugScreen;
use enum_dispatch::enum_dispatch;

use crate::AppDrawTarget;

#[allow(async_fn_in_trait)]
#[enum_dispatch(Screens<DT, E>)]
pub trait Screen<DT: AppDrawTarget<E>, E: Debug> {
    async fn draw_init(&mut self, display: &mut DT);
    async fn draw_frame(&mut self, display: &mut DT);
}

#[allow(clippy::large_enum_variant)]
#[enum_dispatch]
pub enum Screens<DT: AppDrawTarget<E>, E: Debug> {
    Boot(BootScreen<DT, E>),
    Dashboard(DashboardScreen<DT, E>),
    Debug(DebugScreen<DT, E>),
}
