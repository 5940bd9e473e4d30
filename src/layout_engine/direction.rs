use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Every resize action the engine knows about.
///
/// The serialized form is the stored identifier used by keybinds and menus,
/// so variants must never be renamed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum WindowDirection {
    #[default]
    NoAction,

    // General
    Maximize,
    AlmostMaximize,
    Fullscreen,
    Undo,
    InitialFrame,
    Hide,
    Minimize,
    #[serde(rename = "macOSCenter")]
    #[strum(serialize = "macOSCenter")]
    MacOSCenter,
    Center,

    // Halves
    TopHalf,
    RightHalf,
    BottomHalf,
    LeftHalf,

    // Quarters
    TopLeftQuarter,
    TopRightQuarter,
    BottomRightQuarter,
    BottomLeftQuarter,

    // Horizontal thirds
    RightThird,
    RightTwoThirds,
    HorizontalCenterThird,
    LeftThird,
    LeftTwoThirds,

    // Vertical thirds
    TopThird,
    TopTwoThirds,
    VerticalCenterThird,
    BottomThird,
    BottomTwoThirds,

    // Screens
    NextScreen,
    PreviousScreen,

    // Size
    Larger,
    Smaller,

    ShrinkTop,
    ShrinkBottom,
    ShrinkRight,
    ShrinkLeft,

    GrowTop,
    GrowBottom,
    GrowRight,
    GrowLeft,

    Custom,
    Cycle,
}

bitflags! {
    /// Behavioral routing categories. A direction carries at most one flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DirectionCategory: u8 {
        const SCREEN_SWITCH = 1 << 0;
        const SIZE_ADJUST   = 1 << 1;
        const SHRINK        = 1 << 2;
        const GROW          = 1 << 3;
    }
}

/// Fixed menu/keybind groupings, in presentation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DirectionGroup {
    General,
    Halves,
    Quarters,
    HorizontalThirds,
    VerticalThirds,
    ScreenSwitching,
    SizeAdjustment,
    Shrink,
    Grow,
    More,
}

use WindowDirection::*;

const GENERAL: [WindowDirection; 7] =
    [Fullscreen, Maximize, AlmostMaximize, Center, MacOSCenter, Minimize, Hide];
const HALVES: [WindowDirection; 4] = [TopHalf, BottomHalf, LeftHalf, RightHalf];
const QUARTERS: [WindowDirection; 4] =
    [TopLeftQuarter, TopRightQuarter, BottomLeftQuarter, BottomRightQuarter];
const HORIZONTAL_THIRDS: [WindowDirection; 5] =
    [RightThird, RightTwoThirds, HorizontalCenterThird, LeftTwoThirds, LeftThird];
const VERTICAL_THIRDS: [WindowDirection; 5] =
    [TopThird, TopTwoThirds, VerticalCenterThird, BottomTwoThirds, BottomThird];
const SCREEN_SWITCHING: [WindowDirection; 2] = [NextScreen, PreviousScreen];
const SIZE_ADJUSTMENT: [WindowDirection; 2] = [Larger, Smaller];
const SHRINK: [WindowDirection; 4] = [ShrinkTop, ShrinkBottom, ShrinkRight, ShrinkLeft];
const GROW: [WindowDirection; 4] = [GrowTop, GrowBottom, GrowRight, GrowLeft];
const MORE: [WindowDirection; 4] = [InitialFrame, Undo, Custom, Cycle];

impl DirectionGroup {
    pub fn members(self) -> &'static [WindowDirection] {
        match self {
            DirectionGroup::General => &GENERAL,
            DirectionGroup::Halves => &HALVES,
            DirectionGroup::Quarters => &QUARTERS,
            DirectionGroup::HorizontalThirds => &HORIZONTAL_THIRDS,
            DirectionGroup::VerticalThirds => &VERTICAL_THIRDS,
            DirectionGroup::ScreenSwitching => &SCREEN_SWITCHING,
            DirectionGroup::SizeAdjustment => &SIZE_ADJUSTMENT,
            DirectionGroup::Shrink => &SHRINK,
            DirectionGroup::Grow => &GROW,
            DirectionGroup::More => &MORE,
        }
    }

    /// The group that lists `direction`. `NoAction` is in none.
    pub fn of(direction: WindowDirection) -> Option<DirectionGroup> {
        use strum::IntoEnumIterator;
        DirectionGroup::iter().find(|group| group.members().contains(&direction))
    }

    pub fn as_str(self) -> &'static str { self.into() }
}

impl WindowDirection {
    /// All directions in declaration order.
    pub fn iter() -> impl Iterator<Item = WindowDirection> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    pub fn as_str(self) -> &'static str { self.into() }

    pub fn membership(self) -> DirectionCategory {
        match self {
            NextScreen | PreviousScreen => DirectionCategory::SCREEN_SWITCH,
            Larger | Smaller => DirectionCategory::SIZE_ADJUST,
            ShrinkTop | ShrinkBottom | ShrinkRight | ShrinkLeft => DirectionCategory::SHRINK,
            GrowTop | GrowBottom | GrowRight | GrowLeft => DirectionCategory::GROW,
            _ => DirectionCategory::empty(),
        }
    }

    pub fn will_change_screen(self) -> bool {
        self.membership().contains(DirectionCategory::SCREEN_SWITCH)
    }

    pub fn will_adjust_size(self) -> bool {
        self.membership().contains(DirectionCategory::SIZE_ADJUST)
    }

    pub fn will_shrink(self) -> bool { self.membership().contains(DirectionCategory::SHRINK) }

    pub fn will_grow(self) -> bool { self.membership().contains(DirectionCategory::GROW) }

    /// Whether the direction gets its own wedge on the radial menu.
    pub fn has_radial_menu_angle(self) -> bool {
        let no_angle = matches!(
            self,
            NoAction
                | Maximize
                | Center
                | MacOSCenter
                | AlmostMaximize
                | Fullscreen
                | Minimize
                | Hide
                | InitialFrame
                | Undo
                | Cycle
        );
        !no_angle && self.membership().is_empty()
    }

    /// Clockwise degrees from the top of the radial menu.
    ///
    /// `Maximize` reports 0 but fills the whole menu, see
    /// [`should_fill_radial_menu`](Self::should_fill_radial_menu).
    pub fn radial_menu_angle(self) -> Option<f64> {
        match self {
            TopHalf => Some(0.0),
            TopRightQuarter => Some(45.0),
            RightHalf => Some(90.0),
            BottomRightQuarter => Some(135.0),
            BottomHalf => Some(180.0),
            BottomLeftQuarter => Some(225.0),
            LeftHalf => Some(270.0),
            TopLeftQuarter => Some(315.0),
            Maximize => Some(0.0),
            _ => None,
        }
    }

    pub fn should_fill_radial_menu(self) -> bool {
        matches!(self, Maximize | Center | MacOSCenter | AlmostMaximize | Fullscreen)
    }

    /// Step used by the settings preview to loop clockwise around the halves
    /// and quarters, ending on `Maximize`.
    pub fn next_preview_direction(self) -> WindowDirection {
        match self {
            TopHalf => TopRightQuarter,
            TopRightQuarter => RightHalf,
            RightHalf => BottomRightQuarter,
            BottomRightQuarter => BottomHalf,
            BottomHalf => BottomLeftQuarter,
            BottomLeftQuarter => LeftHalf,
            LeftHalf => TopLeftQuarter,
            TopLeftQuarter => Maximize,
            _ => TopHalf,
        }
    }
}

impl std::fmt::Display for WindowDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for DirectionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
