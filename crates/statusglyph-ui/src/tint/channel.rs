use statusglyph_engine::paint::Color;
use statusglyph_engine::time::Animation;

/// A color-bearing element of the status bar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Channel {
    CarrierLabel,
    BatteryFrame,
    BatteryFill,
    BatteryText,
    Clock,
    NetworkTrafficText,
    NetworkTrafficIcon,
    StatusIcon,
    NetworkSignal,
    NoSim,
    AirplaneMode,
    NotificationIcon,
}

impl Channel {
    pub const COUNT: usize = 12;

    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::CarrierLabel,
        Channel::BatteryFrame,
        Channel::BatteryFill,
        Channel::BatteryText,
        Channel::Clock,
        Channel::NetworkTrafficText,
        Channel::NetworkTrafficIcon,
        Channel::StatusIcon,
        Channel::NetworkSignal,
        Channel::NoSim,
        Channel::AirplaneMode,
        Channel::NotificationIcon,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn group(self) -> ChannelGroup {
        match self {
            Channel::CarrierLabel => ChannelGroup::CarrierLabel,
            Channel::BatteryFrame | Channel::BatteryFill | Channel::BatteryText => ChannelGroup::Battery,
            Channel::Clock => ChannelGroup::Clock,
            Channel::NetworkTrafficText | Channel::NetworkTrafficIcon => ChannelGroup::NetworkTraffic,
            Channel::StatusIcon | Channel::NetworkSignal | Channel::NoSim | Channel::AirplaneMode => {
                ChannelGroup::StatusNetworkIcons
            }
            Channel::NotificationIcon => ChannelGroup::NotificationIcons,
        }
    }

    /// Channels whose keyguard counterpart mirrors committed colors.
    pub const fn has_keyguard_mirror(self) -> bool {
        matches!(
            self.group(),
            ChannelGroup::CarrierLabel | ChannelGroup::Battery | ChannelGroup::StatusNetworkIcons
        )
    }
}

/// Channels that are themed together.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChannelGroup {
    CarrierLabel,
    Battery,
    Clock,
    NetworkTraffic,
    StatusNetworkIcons,
    NotificationIcons,
}

impl ChannelGroup {
    pub fn channels(self) -> &'static [Channel] {
        match self {
            ChannelGroup::CarrierLabel => &[Channel::CarrierLabel],
            ChannelGroup::Battery => &[Channel::BatteryFrame, Channel::BatteryFill, Channel::BatteryText],
            ChannelGroup::Clock => &[Channel::Clock],
            ChannelGroup::NetworkTraffic => &[Channel::NetworkTrafficText, Channel::NetworkTrafficIcon],
            ChannelGroup::StatusNetworkIcons => &[
                Channel::StatusIcon,
                Channel::NetworkSignal,
                Channel::NoSim,
                Channel::AirplaneMode,
            ],
            ChannelGroup::NotificationIcons => &[Channel::NotificationIcon],
        }
    }
}

/// One color per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChannelColors([Color; Channel::COUNT]);

impl ChannelColors {
    pub const fn uniform(color: Color) -> Self {
        Self([color; Channel::COUNT])
    }

    pub fn with(mut self, channel: Channel, color: Color) -> Self {
        self.0[channel.index()] = color;
        self
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> Color {
        self.0[channel.index()]
    }

    #[inline]
    pub fn set(&mut self, channel: Channel, color: Color) {
        self.0[channel.index()] = color;
    }

    /// Stock light-theme colors: white icons, translucent battery frame.
    pub fn light() -> Self {
        Self::uniform(Color::WHITE).with(Channel::BatteryFrame, Color(0x4DFF_FFFF))
    }

    /// Stock dark-icon variants.
    pub fn dark() -> Self {
        Self::uniform(Color(0x9900_0000)).with(Channel::BatteryFrame, Color(0x4D00_0000))
    }
}

impl Default for ChannelColors {
    fn default() -> Self {
        Self::light()
    }
}

/// In-flight `old → base` cross-fade of one channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Blend {
    pub anim: Animation,
    /// Trigger sequence number, compared against the dark animator's.
    pub seq: u64,
}

/// Color record of one channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TintChannel {
    /// Committed theme color.
    pub base: Color,
    /// Start color of the running blend.
    pub old: Color,
    /// Color currently shown.
    pub tint: Color,
    pub(crate) blend: Option<Blend>,
    /// Sequence number of the last theme commit.
    pub(crate) theme_seq: u64,
}

impl TintChannel {
    pub fn new(color: Color) -> Self {
        Self { base: color, old: color, tint: color, blend: None, theme_seq: 0 }
    }

    #[inline]
    pub fn is_blending(&self) -> bool {
        self.blend.is_some()
    }
}
