/// Charge level as last reported, or unknown before the first status update.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BatteryLevel {
    #[default]
    Unknown,
    /// Percentage in `0..=100`.
    Known(u8),
}

impl BatteryLevel {
    /// Known level clamped to `0..=100`.
    pub fn percent(value: i32) -> Self {
        BatteryLevel::Known(value.clamp(0, 100) as u8)
    }

    #[inline]
    pub fn value(self) -> Option<u8> {
        match self {
            BatteryLevel::Unknown => None,
            BatteryLevel::Known(v) => Some(v),
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        matches!(self, BatteryLevel::Known(_))
    }
}

/// Charger state as reported by the power supply.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ChargingStatus {
    #[default]
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

impl ChargingStatus {
    /// Maps the platform's raw status code; unrecognized codes are `Unknown`.
    pub fn from_raw(code: i32) -> Self {
        match code {
            2 => ChargingStatus::Charging,
            3 => ChargingStatus::Discharging,
            4 => ChargingStatus::NotCharging,
            5 => ChargingStatus::Full,
            _ => ChargingStatus::Unknown,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BatteryHealth {
    #[default]
    Unknown,
    Good,
    Overheat,
    Dead,
    OverVoltage,
    UnspecifiedFailure,
    Cold,
}

impl BatteryHealth {
    pub fn from_raw(code: i32) -> Self {
        match code {
            2 => BatteryHealth::Good,
            3 => BatteryHealth::Overheat,
            4 => BatteryHealth::Dead,
            5 => BatteryHealth::OverVoltage,
            6 => BatteryHealth::UnspecifiedFailure,
            7 => BatteryHealth::Cold,
            _ => BatteryHealth::Unknown,
        }
    }
}

/// Plug source bits carried by status updates.
pub mod plug {
    pub const AC: u32 = 1;
    pub const USB: u32 = 2;
    pub const WIRELESS: u32 = 4;
}

/// Snapshot of the battery as the meter sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatteryState {
    pub level: BatteryLevel,
    /// Raw plug-source bitmask; `plugged` is derived from it.
    pub plug_type: u32,
    pub plugged: bool,
    pub status: ChargingStatus,
    pub health: BatteryHealth,
    pub technology: Option<String>,
    /// Millivolts.
    pub voltage: i32,
    /// Tenths of a degree Celsius.
    pub temperature: i32,
}

impl BatteryState {
    /// Whether the glyph should show that energy is flowing in.
    ///
    /// Charging always indicates; a plugged battery reporting Full keeps
    /// indicating; anything else does not.
    pub fn should_indicate_charging(&self) -> bool {
        match self.status {
            ChargingStatus::Charging => true,
            ChargingStatus::Full => self.plugged,
            _ => false,
        }
    }
}
