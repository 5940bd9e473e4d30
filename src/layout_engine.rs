//! Layout selection: which window direction applies and what part of the
//! screen it occupies.

mod direction;
mod frame;
mod snap;

use static_assertions::assert_impl_all;

pub use direction::{DirectionCategory, DirectionGroup, WindowDirection};
pub use frame::{FractionalRect, resolve};
pub use snap::{SnapTarget, SnapZones, classify};

assert_impl_all!(WindowDirection: Copy, Send, Sync);
assert_impl_all!(FractionalRect: Copy, Send, Sync);
assert_impl_all!(SnapZones: Copy, Send, Sync);
