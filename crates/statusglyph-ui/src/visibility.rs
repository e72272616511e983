use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};
use statusglyph_engine::time::{Animation, AnimationPhase, Clock, Interpolator, Millis};

use crate::elements::{Element, StatusBarElements, Visibility};

pub const HIDE_DURATION_MS: Millis = 160;
pub const SHOW_DURATION_MS: Millis = 320;
pub const SHOW_DELAY_MS: Millis = 50;

/// Alpha-out curve for hiding.
const ALPHA_OUT: Interpolator = Interpolator::CubicBezier(0.0, 0.0, 0.8, 1.0);
/// Alpha-in curve for showing.
const ALPHA_IN: Interpolator = Interpolator::CubicBezier(0.4, 0.0, 1.0, 1.0);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ClockStyle {
    #[default]
    Default,
    Centered,
    Hidden,
}

impl ClockStyle {
    /// Maps the settings value; anything unknown falls back to the default.
    pub fn from_raw(v: i32) -> Self {
        match v {
            1 => ClockStyle::Centered,
            2 => ClockStyle::Hidden,
            _ => ClockStyle::Default,
        }
    }
}

/// Keyguard fade-away timing that shows should line up with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyguardFade {
    pub delay: Millis,
    pub duration: Millis,
}

#[derive(Debug, Copy, Clone)]
struct Fade {
    anim: Animation,
    hide_at_end: bool,
}

/// Parses a comma-separated slot list, skipping empty entries.
pub fn parse_icon_blacklist(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|s| s.split(',').filter(|slot| !slot.is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Shows, hides and fades the status bar areas.
pub struct VisibilityController<C: Clock> {
    clock: C,
    clock_style: ClockStyle,
    show_battery_bar: bool,
    keyguard_fade: Option<KeyguardFade>,
    fades: HashMap<Element, Fade>,
    alpha: HashMap<Element, f32>,
    icon_blacklist: BTreeSet<String>,
}

impl<C: Clock> VisibilityController<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            clock_style: ClockStyle::Default,
            show_battery_bar: false,
            keyguard_fade: None,
            fades: HashMap::new(),
            alpha: HashMap::new(),
            icon_blacklist: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn clock_style(&self) -> ClockStyle {
        self.clock_style
    }

    /// Last alpha pushed for `element`; fully opaque until touched.
    pub fn alpha(&self, element: Element) -> f32 {
        self.alpha.get(&element).copied().unwrap_or(1.0)
    }

    pub fn is_fading(&self, element: Element) -> bool {
        self.fades.contains_key(&element)
    }

    pub fn is_animating(&self) -> bool {
        !self.fades.is_empty()
    }

    /// Keyguard fade-away in progress, if any. Shows started meanwhile
    /// follow its timing.
    pub fn set_keyguard_fade(&mut self, fade: Option<KeyguardFade>) {
        self.keyguard_fade = fade;
    }

    fn set_alpha(&mut self, out: &mut impl StatusBarElements, element: Element, alpha: f32) {
        self.alpha.insert(element, alpha);
        out.set_alpha(element, alpha);
    }

    fn animate_hide(&mut self, out: &mut impl StatusBarElements, element: Element, animate: bool) {
        self.fades.remove(&element);
        if !animate {
            self.set_alpha(out, element, 0.0);
            out.set_visibility(element, Visibility::Invisible);
            return;
        }
        let now = self.clock.now_ms();
        let anim = Animation::new(self.alpha(element), 0.0, now, HIDE_DURATION_MS).interpolator(ALPHA_OUT);
        self.fades.insert(element, Fade { anim, hide_at_end: true });
    }

    fn animate_show(&mut self, out: &mut impl StatusBarElements, element: Element, animate: bool) {
        self.fades.remove(&element);
        out.set_visibility(element, Visibility::Visible);
        if !animate {
            self.set_alpha(out, element, 1.0);
            return;
        }
        let now = self.clock.now_ms();
        let from = self.alpha(element);
        let anim = match self.keyguard_fade {
            Some(kg) => Animation::new(from, 1.0, now, kg.duration)
                .delay(kg.delay)
                .interpolator(Interpolator::LinearOutSlowIn),
            None => Animation::new(from, 1.0, now, SHOW_DURATION_MS)
                .delay(SHOW_DELAY_MS)
                .interpolator(ALPHA_IN),
        };
        self.fades.insert(element, Fade { anim, hide_at_end: false });
    }

    // ── areas ─────────────────────────────────────────────────────────────

    pub fn hide_system_icon_area(&mut self, out: &mut impl StatusBarElements, animate: bool) {
        self.animate_hide(out, Element::SystemIconArea, animate);
        if self.clock_style == ClockStyle::Centered {
            self.animate_hide(out, Element::CenterClockLayout, animate);
        }
        if self.show_battery_bar {
            self.animate_hide(out, Element::BatteryBar, animate);
        }
    }

    pub fn show_system_icon_area(&mut self, out: &mut impl StatusBarElements, animate: bool) {
        self.animate_show(out, Element::SystemIconArea, animate);
        if self.clock_style == ClockStyle::Centered {
            self.animate_show(out, Element::CenterClockLayout, animate);
        }
        if self.show_battery_bar {
            self.animate_show(out, Element::BatteryBar, animate);
        }
    }

    pub fn hide_notification_icon_area(&mut self, out: &mut impl StatusBarElements, animate: bool) {
        self.animate_hide(out, Element::NotificationIconArea, animate);
    }

    pub fn show_notification_icon_area(&mut self, out: &mut impl StatusBarElements, animate: bool) {
        self.animate_show(out, Element::NotificationIconArea, animate);
    }

    // ── clock ─────────────────────────────────────────────────────────────

    pub fn update_clock_style(&mut self, out: &mut impl StatusBarElements, style: ClockStyle) {
        debug!("clock style {style:?}");
        self.clock_style = style;
        let (default, centered) = match style {
            ClockStyle::Default => (true, false),
            ClockStyle::Centered => (false, true),
            ClockStyle::Hidden => (false, false),
        };
        out.set_visibility(Element::ClockDefault, Visibility::shown_if(default));
        out.set_visibility(Element::CenterClockLayout, Visibility::shown_if(centered));
        out.set_visibility(Element::ClockCentered, Visibility::shown_if(centered));
    }

    /// Toggles whichever clock the current style shows.
    pub fn set_clock_visibility(&mut self, out: &mut impl StatusBarElements, visible: bool) {
        let element = match self.clock_style {
            ClockStyle::Default => Element::ClockDefault,
            ClockStyle::Centered => Element::ClockCentered,
            ClockStyle::Hidden => return,
        };
        out.set_visibility(element, Visibility::shown_if(visible));
    }

    // ── carrier label and battery ─────────────────────────────────────────

    /// With `force_hide`, the label also disappears once the notification
    /// icons reach `max_allowed_icons`.
    pub fn update_carrier_label_visibility(
        &mut self,
        out: &mut impl StatusBarElements,
        show: bool,
        force_hide: bool,
        max_allowed_icons: usize,
    ) {
        let crowded = force_hide && out.notification_icon_count() >= max_allowed_icons;
        out.set_visibility(Element::CarrierLabel, Visibility::shown_if(show && !crowded));
    }

    pub fn update_carrier_label_keyguard_visibility(&mut self, out: &mut impl StatusBarElements, show: bool) {
        out.set_visibility(Element::CarrierLabelKeyguard, Visibility::shown_if(show));
    }

    pub fn update_battery_visibility(&mut self, out: &mut impl StatusBarElements, show: bool) {
        out.set_visibility(Element::Battery, Visibility::shown_if(show));
        out.set_visibility(Element::BatteryKeyguard, Visibility::shown_if(show));
    }

    pub fn update_battery_bar_visibility(&mut self, out: &mut impl StatusBarElements, show: bool, show_on_keyguard: bool) {
        self.show_battery_bar = show;
        out.set_visibility(Element::BatteryBar, Visibility::shown_if(show));
        out.set_visibility(Element::BatteryBarKeyguard, Visibility::shown_if(show_on_keyguard));
    }

    // ── blacklist ─────────────────────────────────────────────────────────

    pub fn set_icon_blacklist(&mut self, raw: Option<&str>) {
        self.icon_blacklist = parse_icon_blacklist(raw);
        debug!("icon blacklist {:?}", self.icon_blacklist);
    }

    pub fn is_blacklisted(&self, slot: &str) -> bool {
        self.icon_blacklist.contains(slot)
    }

    // ── tick ──────────────────────────────────────────────────────────────

    /// Advances running fades. Returns whether any are still running.
    pub fn tick(&mut self, out: &mut impl StatusBarElements) -> bool {
        let now = self.clock.now_ms();
        let mut done = Vec::new();
        let mut updates = Vec::new();

        for (&element, fade) in &self.fades {
            let sample = fade.anim.sample(now);
            if sample.phase == AnimationPhase::Delayed {
                continue;
            }
            updates.push((element, sample.value));
            if sample.phase == AnimationPhase::Finished {
                done.push((element, fade.hide_at_end));
            }
        }

        for (element, alpha) in updates {
            trace!("{element:?} alpha {alpha:.3}");
            self.set_alpha(out, element, alpha);
        }
        for (element, hide) in done {
            self.fades.remove(&element);
            if hide {
                out.set_visibility(element, Visibility::Invisible);
            }
        }

        self.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use statusglyph_engine::time::ManualClock;

    use super::*;
    use crate::elements::testing::RecordingElements;

    fn setup() -> (Rc<ManualClock>, VisibilityController<Rc<ManualClock>>, RecordingElements) {
        let clock = Rc::new(ManualClock::new(0));
        (clock.clone(), VisibilityController::new(clock), RecordingElements::new())
    }

    // ── fades ─────────────────────────────────────────────────────────────

    #[test]
    fn immediate_hide_and_show() {
        let (_, mut vis, mut out) = setup();
        vis.hide_notification_icon_area(&mut out, false);
        assert_eq!(out.visibility[&Element::NotificationIconArea], Visibility::Invisible);
        assert_eq!(out.alpha[&Element::NotificationIconArea], 0.0);

        vis.show_notification_icon_area(&mut out, false);
        assert_eq!(out.visibility[&Element::NotificationIconArea], Visibility::Visible);
        assert_eq!(vis.alpha(Element::NotificationIconArea), 1.0);
    }

    #[test]
    fn hide_fades_then_turns_invisible() {
        let (clock, mut vis, mut out) = setup();
        vis.hide_system_icon_area(&mut out, true);
        assert!(!out.visibility.contains_key(&Element::SystemIconArea));

        clock.advance(80);
        assert!(vis.tick(&mut out));
        let mid = vis.alpha(Element::SystemIconArea);
        assert!(mid > 0.0 && mid < 1.0);

        clock.advance(80);
        assert!(!vis.tick(&mut out));
        assert_eq!(vis.alpha(Element::SystemIconArea), 0.0);
        assert_eq!(out.visibility[&Element::SystemIconArea], Visibility::Invisible);
    }

    #[test]
    fn show_waits_for_delay() {
        let (clock, mut vis, mut out) = setup();
        vis.hide_system_icon_area(&mut out, false);
        vis.show_system_icon_area(&mut out, true);
        assert_eq!(out.visibility[&Element::SystemIconArea], Visibility::Visible);

        clock.advance(SHOW_DELAY_MS - 10);
        vis.tick(&mut out);
        assert_eq!(vis.alpha(Element::SystemIconArea), 0.0);

        clock.advance(10 + SHOW_DURATION_MS);
        assert!(!vis.tick(&mut out));
        assert_eq!(vis.alpha(Element::SystemIconArea), 1.0);
    }

    #[test]
    fn show_follows_keyguard_fade() {
        let (clock, mut vis, mut out) = setup();
        vis.set_keyguard_fade(Some(KeyguardFade { delay: 100, duration: 200 }));
        vis.hide_notification_icon_area(&mut out, false);
        vis.show_notification_icon_area(&mut out, true);

        clock.advance(90);
        assert!(vis.tick(&mut out));
        assert_eq!(vis.alpha(Element::NotificationIconArea), 0.0);

        clock.advance(220);
        assert!(!vis.tick(&mut out));
        assert_eq!(vis.alpha(Element::NotificationIconArea), 1.0);
    }

    #[test]
    fn show_cancels_pending_hide() {
        let (clock, mut vis, mut out) = setup();
        vis.hide_notification_icon_area(&mut out, true);
        clock.advance(40);
        vis.tick(&mut out);
        vis.show_notification_icon_area(&mut out, false);

        clock.advance(500);
        vis.tick(&mut out);
        assert_eq!(out.visibility[&Element::NotificationIconArea], Visibility::Visible);
        assert_eq!(vis.alpha(Element::NotificationIconArea), 1.0);
    }

    #[test]
    fn system_area_takes_centered_clock_and_battery_bar_along() {
        let (_, mut vis, mut out) = setup();
        vis.update_clock_style(&mut out, ClockStyle::Centered);
        vis.update_battery_bar_visibility(&mut out, true, false);
        vis.hide_system_icon_area(&mut out, false);
        assert_eq!(out.visibility[&Element::CenterClockLayout], Visibility::Invisible);
        assert_eq!(out.visibility[&Element::BatteryBar], Visibility::Invisible);
        assert_eq!(out.visibility[&Element::BatteryBarKeyguard], Visibility::Gone);
    }

    // ── clock ─────────────────────────────────────────────────────────────

    #[test]
    fn clock_styles_pick_one_clock() {
        let (_, mut vis, mut out) = setup();
        vis.update_clock_style(&mut out, ClockStyle::from_raw(1));
        assert_eq!(out.visibility[&Element::ClockDefault], Visibility::Gone);
        assert_eq!(out.visibility[&Element::ClockCentered], Visibility::Visible);

        vis.set_clock_visibility(&mut out, false);
        assert_eq!(out.visibility[&Element::ClockCentered], Visibility::Gone);

        vis.update_clock_style(&mut out, ClockStyle::Hidden);
        vis.set_clock_visibility(&mut out, true);
        assert_eq!(out.visibility[&Element::ClockDefault], Visibility::Gone);
        assert_eq!(out.visibility[&Element::ClockCentered], Visibility::Gone);
        assert_eq!(ClockStyle::from_raw(42), ClockStyle::Default);
    }

    // ── carrier label ─────────────────────────────────────────────────────

    #[test]
    fn carrier_label_force_hidden_when_crowded() {
        let (_, mut vis, mut out) = setup();
        out.notification_icons = 4;
        vis.update_carrier_label_visibility(&mut out, true, true, 4);
        assert_eq!(out.visibility[&Element::CarrierLabel], Visibility::Gone);

        vis.update_carrier_label_visibility(&mut out, true, false, 4);
        assert_eq!(out.visibility[&Element::CarrierLabel], Visibility::Visible);

        out.notification_icons = 3;
        vis.update_carrier_label_visibility(&mut out, true, true, 4);
        assert_eq!(out.visibility[&Element::CarrierLabel], Visibility::Visible);
    }

    // ── blacklist ─────────────────────────────────────────────────────────

    #[test]
    fn blacklist_skips_empty_entries() {
        let list = parse_icon_blacklist(Some("rotate,,headset,"));
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["headset", "rotate"]);
        assert!(parse_icon_blacklist(None).is_empty());

        let (_, mut vis, _) = setup();
        vis.set_icon_blacklist(Some("alarm_clock"));
        assert!(vis.is_blacklisted("alarm_clock"));
        assert!(!vis.is_blacklisted("rotate"));
    }
}
