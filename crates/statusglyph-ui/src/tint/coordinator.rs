use log::{debug, trace};
use statusglyph_engine::paint::Color;
use statusglyph_engine::time::{Animation, AnimationPhase, Clock, Interpolator, Millis};

use crate::elements::StatusBarElements;

use super::channel::{Blend, Channel, ChannelColors, ChannelGroup, TintChannel};
use super::config::TintConfig;

/// App-transition bookkeeping for deferred dark-intensity changes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TransitionDeferral {
    /// An app transition was announced but has not started.
    pub pending: bool,
    /// A dark change arrived while pending and waits for the transition.
    pub tint_change_pending: bool,
    pub pending_intensity: f32,
    /// Between "transition starting" and its start time, new dark changes
    /// are scheduled to line up with the transition.
    pub deferring: bool,
    pub defer_start: Millis,
    pub defer_duration: Millis,
}

/// Owns every themed channel and drives the theme cross-fades and the
/// shared dark-intensity tint.
///
/// Colors only move on [`tick`](Self::tick) or on an immediate update; each
/// change is pushed to the element sink in the same call. When a channel's
/// cross-fade and the dark animation run at once, whichever was triggered
/// last decides the displayed tint.
pub struct TintTransitionCoordinator<C: Clock, E: StatusBarElements> {
    clock: C,
    elements: E,
    config: TintConfig,

    channels: [TintChannel; Channel::COUNT],
    dark_colors: ChannelColors,

    dark_intensity: f32,
    dark_anim: Option<Animation>,
    dark_seq: u64,
    next_seq: u64,

    deferral: TransitionDeferral,
}

impl<C: Clock, E: StatusBarElements> TintTransitionCoordinator<C, E> {
    /// Seeds every channel with its configured color and pushes the initial
    /// state.
    pub fn new(config: TintConfig, clock: C, elements: E) -> Self {
        let channels = Channel::ALL.map(|ch| TintChannel::new(config.colors.get(ch)));
        let mut this = Self {
            clock,
            elements,
            dark_colors: config.dark_colors,
            config,
            channels,
            dark_intensity: 0.0,
            dark_anim: None,
            dark_seq: 0,
            next_seq: 1,
            deferral: TransitionDeferral::default(),
        };
        for ch in Channel::ALL {
            let color = this.channels[ch.index()].tint;
            this.elements.set_color(ch, color);
        }
        this
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn elements(&self) -> &E {
        &self.elements
    }

    #[inline]
    pub fn elements_mut(&mut self) -> &mut E {
        &mut self.elements
    }

    #[inline]
    pub fn config(&self) -> &TintConfig {
        &self.config
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> &TintChannel {
        &self.channels[channel.index()]
    }

    #[inline]
    pub fn tint(&self, channel: Channel) -> Color {
        self.channel(channel).tint
    }

    #[inline]
    pub fn dark_intensity(&self) -> f32 {
        self.dark_intensity
    }

    #[inline]
    pub fn deferral(&self) -> TransitionDeferral {
        self.deferral
    }

    /// Target of the running dark animation, if any.
    pub fn dark_target(&self) -> Option<f32> {
        self.dark_anim.map(|a| a.to())
    }

    pub fn is_animating(&self) -> bool {
        self.dark_anim.is_some() || self.channels.iter().any(TintChannel::is_blending)
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn follows_dark(&self, channel: Channel) -> bool {
        channel != Channel::CarrierLabel || self.config.supports_mobile_data
    }

    fn dark_tint(&self, channel: Channel) -> Color {
        let base = self.channels[channel.index()].base;
        if self.follows_dark(channel) {
            base.lerp(self.dark_colors.get(channel), self.dark_intensity)
        } else {
            base
        }
    }

    fn push(&mut self, channel: Channel, color: Color) {
        self.channels[channel.index()].tint = color;
        self.elements.set_color(channel, color);
    }

    // ── dark intensity ────────────────────────────────────────────────────

    pub fn set_icons_dark(&mut self, dark: bool, animate: bool) {
        self.set_dark_intensity(if dark { 1.0 } else { 0.0 }, animate);
    }

    pub fn set_dark_intensity(&mut self, target: f32, animate: bool) {
        let target = target.clamp(0.0, 1.0);
        let now = self.clock.now_ms();
        self.expire_deferral(now);

        if !animate {
            self.dark_anim = None;
            self.dark_seq = self.next_seq();
            self.apply_dark_intensity(target);
        } else if self.deferral.pending {
            self.defer_tint_change(target);
        } else if self.deferral.deferring {
            let delay = self.deferral.defer_start.saturating_sub(now);
            self.animate_dark(target, delay, self.deferral.defer_duration);
        } else {
            self.animate_dark(target, 0, self.config.tint_duration_ms);
        }
    }

    /// Replaces the dark-icon variants and re-evaluates the tint.
    pub fn set_dark_colors(&mut self, dark: ChannelColors) {
        self.dark_colors = dark;
        if self.dark_anim.is_none() {
            self.apply_dark_intensity(self.dark_intensity);
        }
    }

    fn defer_tint_change(&mut self, target: f32) {
        if self.deferral.tint_change_pending && self.deferral.pending_intensity == target {
            return;
        }
        debug!("deferring dark intensity {target} until app transition");
        self.deferral.tint_change_pending = true;
        self.deferral.pending_intensity = target;
    }

    fn animate_dark(&mut self, target: f32, delay: Millis, duration: Millis) {
        self.dark_anim = None;
        if self.dark_intensity == target {
            return;
        }
        debug!("dark intensity {} -> {target} (delay {delay} ms, {duration} ms)", self.dark_intensity);
        let now = self.clock.now_ms();
        self.dark_anim = Some(
            Animation::new(self.dark_intensity, target, now, duration)
                .delay(delay)
                .interpolator(Interpolator::FastOutSlowIn),
        );
        self.dark_seq = self.next_seq();
    }

    /// Sets the intensity and pushes every channel the dark tint currently
    /// owns.
    fn apply_dark_intensity(&mut self, intensity: f32) {
        self.dark_intensity = intensity;
        for ch in Channel::ALL {
            if !self.follows_dark(ch) {
                continue;
            }
            if self.channels[ch.index()].theme_seq < self.dark_seq {
                let color = self.dark_tint(ch);
                self.push(ch, color);
            }
        }
    }

    // ── app transitions ───────────────────────────────────────────────────

    pub fn app_transition_pending(&mut self) {
        trace!("app transition pending");
        self.deferral.pending = true;
    }

    pub fn app_transition_cancelled(&mut self) {
        if self.deferral.pending && self.deferral.tint_change_pending {
            self.deferral.tint_change_pending = false;
            let target = self.deferral.pending_intensity;
            self.animate_dark(target, 0, self.config.tint_duration_ms);
        }
        self.deferral.pending = false;
    }

    /// Transition starts at `start` and runs for `duration`.
    pub fn app_transition_starting(&mut self, start: Millis, duration: Millis) {
        let now = self.clock.now_ms();
        if self.deferral.pending && self.deferral.tint_change_pending {
            self.deferral.tint_change_pending = false;
            let target = self.deferral.pending_intensity;
            self.animate_dark(target, start.saturating_sub(now), duration);
        } else if self.deferral.pending {
            debug!("deferring dark changes until {start} ({duration} ms)");
            self.deferral.deferring = true;
            self.deferral.defer_start = start;
            self.deferral.defer_duration = duration;
        }
        self.deferral.pending = false;
    }

    fn expire_deferral(&mut self, now: Millis) {
        if self.deferral.deferring && now >= self.deferral.defer_start {
            trace!("deferral window closed");
            self.deferral.deferring = false;
        }
    }

    // ── theme colors ──────────────────────────────────────────────────────

    /// Commits a theme color for one channel.
    ///
    /// The channel shows the new color until the next dark change re-applies
    /// the dark tint. Animated updates cross-fade from the previous committed
    /// color; the
    /// network traffic channels only do so while the meter is active and
    /// notification icons never do.
    pub fn set_theme_color(&mut self, channel: Channel, color: Color, animate: bool) {
        let animate = animate
            && match channel.group() {
                ChannelGroup::NotificationIcons => false,
                ChannelGroup::NetworkTraffic => self.elements.network_traffic_active(),
                _ => true,
            };

        let now = self.clock.now_ms();
        let blend_ms = self.config.blend_duration_ms;
        let seq = self.next_seq();
        let ch = &mut self.channels[channel.index()];
        ch.base = color;
        ch.theme_seq = seq;
        if animate {
            ch.blend = Some(Blend { anim: Animation::new(0.0, 1.0, now, blend_ms), seq });
            trace!("{channel:?} blending {} -> {color}", ch.old);
        } else {
            ch.old = color;
            ch.blend = None;
            self.push(channel, color);
        }

        if channel.has_keyguard_mirror() {
            self.elements.set_keyguard_color(channel, color);
        }
    }

    /// Commits colors for a group of channels in one go, e.g. the battery's
    /// frame, fill and text.
    pub fn set_theme_colors(&mut self, colors: &[(Channel, Color)], animate: bool) {
        for &(channel, color) in colors {
            self.set_theme_color(channel, color, animate);
        }
    }

    pub fn update_carrier_label_color(&mut self, color: Color, animate: bool) {
        self.set_theme_color(Channel::CarrierLabel, color, animate);
    }

    pub fn update_battery_colors(&mut self, frame: Color, fill: Color, text: Color, animate: bool) {
        self.set_theme_colors(
            &[(Channel::BatteryFrame, frame), (Channel::BatteryFill, fill), (Channel::BatteryText, text)],
            animate,
        );
    }

    pub fn update_clock_color(&mut self, color: Color, animate: bool) {
        self.set_theme_color(Channel::Clock, color, animate);
    }

    pub fn update_network_traffic_colors(&mut self, text: Color, icon: Color, animate: bool) {
        self.set_theme_colors(
            &[(Channel::NetworkTrafficText, text), (Channel::NetworkTrafficIcon, icon)],
            animate,
        );
    }

    pub fn update_status_network_icon_colors(
        &mut self,
        status: Color,
        signal: Color,
        no_sim: Color,
        airplane: Color,
        animate: bool,
    ) {
        self.set_theme_colors(
            &[
                (Channel::StatusIcon, status),
                (Channel::NetworkSignal, signal),
                (Channel::NoSim, no_sim),
                (Channel::AirplaneMode, airplane),
            ],
            animate,
        );
    }

    pub fn update_notification_icon_color(&mut self, color: Color) {
        self.set_theme_color(Channel::NotificationIcon, color, false);
    }

    // ── tick ──────────────────────────────────────────────────────────────

    /// Advances every running animation to the clock's current time and
    /// pushes the resulting colors. Returns whether anything is still
    /// animating.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.expire_deferral(now);

        if let Some(anim) = self.dark_anim {
            let sample = anim.sample(now);
            if sample.phase != AnimationPhase::Delayed {
                trace!("dark intensity {:.3}", sample.value);
                self.apply_dark_intensity(sample.value);
            }
            if sample.phase == AnimationPhase::Finished {
                self.dark_anim = None;
            }
        }

        for ch in Channel::ALL {
            let Some(blend) = self.channels[ch.index()].blend else {
                continue;
            };
            let sample = blend.anim.sample(now);
            if sample.phase == AnimationPhase::Finished {
                let rec = &mut self.channels[ch.index()];
                rec.old = rec.base;
                rec.blend = None;
                let base = rec.base;
                let tint = if blend.seq > self.dark_seq { base } else { self.dark_tint(ch) };
                self.push(ch, tint);
            } else if blend.seq > self.dark_seq {
                let rec = self.channels[ch.index()];
                self.push(ch, rec.old.lerp(rec.base, sample.fraction));
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

    type Coordinator = TintTransitionCoordinator<Rc<ManualClock>, RecordingElements>;

    const RED: Color = Color(0xFFFF_0000);
    const BLUE: Color = Color(0xFF00_00FF);
    const GREEN: Color = Color(0xFF00_FF00);

    fn setup(config: TintConfig) -> (Rc<ManualClock>, Coordinator) {
        let clock = Rc::new(ManualClock::new(1_000));
        let coord = TintTransitionCoordinator::new(config, clock.clone(), RecordingElements::new());
        (clock, coord)
    }

    fn run(clock: &ManualClock, coord: &mut Coordinator, ms: Millis, step: Millis) {
        let mut elapsed = 0;
        while elapsed < ms {
            clock.advance(step);
            elapsed += step;
            coord.tick();
        }
    }

    // ── dark intensity ────────────────────────────────────────────────────

    #[test]
    fn initial_colors_are_pushed() {
        let (_, coord) = setup(TintConfig::default());
        assert_eq!(coord.elements().colors.len(), Channel::COUNT);
        assert_eq!(coord.elements().last(Channel::BatteryFrame), Some(Color(0x4DFF_FFFF)));
    }

    #[test]
    fn immediate_dark_applies_to_every_channel() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, false);
        assert_eq!(coord.dark_intensity(), 1.0);
        for ch in Channel::ALL {
            assert_eq!(coord.tint(ch), ChannelColors::dark().get(ch));
        }
        assert!(!coord.is_animating());
    }

    #[test]
    fn animated_dark_runs_for_default_duration() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, true);
        assert_eq!(coord.dark_target(), Some(1.0));

        clock.advance(60);
        assert!(coord.tick());
        let mid = coord.dark_intensity();
        assert!(mid > 0.0 && mid < 1.0);

        clock.advance(60);
        assert!(!coord.tick());
        assert_eq!(coord.dark_intensity(), 1.0);
        assert_eq!(coord.tint(Channel::Clock), Color(0x9900_0000));
    }

    #[test]
    fn animating_to_current_intensity_is_noop() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(false, true);
        assert!(!coord.is_animating());
    }

    #[test]
    fn new_dark_call_cancels_in_flight_animation() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, true);
        run(&clock, &mut coord, 40, 20);
        coord.set_icons_dark(false, false);
        assert_eq!(coord.dark_intensity(), 0.0);
        assert!(!coord.is_animating());
        run(&clock, &mut coord, 200, 20);
        assert_eq!(coord.dark_intensity(), 0.0);
    }

    #[test]
    fn carrier_label_ignores_dark_without_mobile_data() {
        let (_, mut coord) = setup(TintConfig::default().supports_mobile_data(false));
        coord.set_icons_dark(true, false);
        assert_eq!(coord.tint(Channel::CarrierLabel), Color::WHITE);
        assert_eq!(coord.tint(Channel::Clock), Color(0x9900_0000));
    }

    // ── app transitions ───────────────────────────────────────────────────

    #[test]
    fn dark_change_waits_for_pending_transition() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.app_transition_pending();
        coord.set_icons_dark(true, true);
        assert!(!coord.is_animating());
        assert!(coord.deferral().tint_change_pending);

        run(&clock, &mut coord, 500, 50);
        assert_eq!(coord.dark_intensity(), 0.0);

        let now = clock.now_ms();
        coord.app_transition_starting(now + 100, 300);
        assert!(!coord.deferral().pending);
        assert_eq!(coord.dark_target(), Some(1.0));

        run(&clock, &mut coord, 100, 50);
        assert_eq!(coord.dark_intensity(), 0.0);
        run(&clock, &mut coord, 300, 50);
        assert_eq!(coord.dark_intensity(), 1.0);
    }

    #[test]
    fn repeated_deferral_is_noop() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.app_transition_pending();
        coord.set_icons_dark(true, true);
        let before = coord.deferral();
        coord.set_icons_dark(true, true);
        assert_eq!(coord.deferral(), before);
    }

    #[test]
    fn cancelled_transition_animates_deferred_change() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.app_transition_pending();
        coord.set_icons_dark(true, true);
        coord.app_transition_cancelled();
        assert!(!coord.deferral().pending);
        assert!(!coord.deferral().tint_change_pending);
        run(&clock, &mut coord, 120, 40);
        assert_eq!(coord.dark_intensity(), 1.0);
    }

    #[test]
    fn starting_without_change_opens_deferral_window() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.app_transition_pending();
        let start = clock.now_ms() + 200;
        coord.app_transition_starting(start, 400);
        assert!(coord.deferral().deferring);

        clock.advance(50);
        coord.set_icons_dark(true, true);
        run(&clock, &mut coord, 150, 50);
        assert_eq!(coord.dark_intensity(), 0.0);
        run(&clock, &mut coord, 200, 50);
        let mid = coord.dark_intensity();
        assert!(mid > 0.0 && mid < 1.0);
        run(&clock, &mut coord, 200, 50);
        assert_eq!(coord.dark_intensity(), 1.0);
        assert!(!coord.deferral().deferring);
    }

    #[test]
    fn deferral_window_closes_at_start_time() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.app_transition_pending();
        coord.app_transition_starting(clock.now_ms() + 100, 400);
        clock.advance(100);
        coord.set_icons_dark(true, true);
        run(&clock, &mut coord, 120, 40);
        assert_eq!(coord.dark_intensity(), 1.0);
    }

    // ── theme blends ──────────────────────────────────────────────────────

    #[test]
    fn immediate_theme_color_commits_everything() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.update_clock_color(RED, false);
        let ch = coord.channel(Channel::Clock);
        assert_eq!((ch.base, ch.old, ch.tint), (RED, RED, RED));
        assert_eq!(coord.elements().last(Channel::Clock), Some(RED));
    }

    #[test]
    fn blend_is_monotonic_and_exact_at_end() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.update_clock_color(RED, false);
        coord.update_clock_color(BLUE, true);

        let (mut last_red, mut last_blue) = (255u8, 0u8);
        for _ in 0..10 {
            clock.advance(50);
            coord.tick();
            let tint = coord.tint(Channel::Clock);
            assert!(tint.blue() >= last_blue);
            assert!(tint.red() <= last_red);
            (last_red, last_blue) = (tint.red(), tint.blue());
        }
        let ch = coord.channel(Channel::Clock);
        assert_eq!(ch.tint, BLUE);
        assert_eq!(ch.old, BLUE);
        assert!(!ch.is_blending());
    }

    #[test]
    fn blends_run_per_channel() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.update_clock_color(RED, true);
        clock.advance(250);
        coord.tick();
        coord.update_carrier_label_color(BLUE, true);

        clock.advance(250);
        coord.tick();
        assert_eq!(coord.tint(Channel::Clock), RED);
        assert!(coord.channel(Channel::CarrierLabel).is_blending());

        clock.advance(250);
        coord.tick();
        assert_eq!(coord.tint(Channel::CarrierLabel), BLUE);
    }

    #[test]
    fn group_update_blends_all_members() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.update_battery_colors(RED, RED, BLUE, true);
        for ch in ChannelGroup::Battery.channels() {
            assert!(coord.channel(*ch).is_blending());
        }
        assert_eq!(coord.elements().keyguard.len(), 3);
        run(&clock, &mut coord, 500, 100);
        assert_eq!(coord.tint(Channel::BatteryFrame), RED);
        assert_eq!(coord.tint(Channel::BatteryText), BLUE);
    }

    #[test]
    fn network_traffic_blends_only_while_active() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.elements_mut().traffic_active = false;
        coord.update_network_traffic_colors(RED, BLUE, true);
        assert!(!coord.is_animating());
        assert_eq!(coord.tint(Channel::NetworkTrafficIcon), BLUE);
        assert!(coord.elements().keyguard.is_empty());
    }

    #[test]
    fn notification_icon_color_is_immediate() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.update_notification_icon_color(RED);
        assert!(!coord.is_animating());
        assert_eq!(coord.tint(Channel::NotificationIcon), RED);
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn later_blend_overrides_running_dark_tint() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, true);
        coord.update_clock_color(RED, true);

        clock.advance(60);
        coord.tick();
        assert!(coord.dark_intensity() > 0.0);
        let clock_tint = coord.tint(Channel::Clock);
        assert_eq!(clock_tint.alpha(), 0xFF);
        assert_eq!(clock_tint.red(), 0xFF);
        assert!(clock_tint.blue() < 0xFF);
        assert_eq!(coord.tint(Channel::StatusIcon), Color::WHITE.lerp(Color(0x9900_0000), coord.dark_intensity()));

        clock.advance(370);
        coord.tick();
        assert_eq!(coord.dark_intensity(), 1.0);
        assert!(coord.channel(Channel::Clock).is_blending());
        let near_end = coord.tint(Channel::Clock);
        assert_eq!((near_end.alpha(), near_end.red()), (0xFF, 0xFF));

        clock.advance(70);
        coord.tick();
        let ch = coord.channel(Channel::Clock);
        assert!(!ch.is_blending());
        assert_eq!((ch.base, ch.old, ch.tint), (RED, RED, RED));
        assert_eq!(coord.elements().last(Channel::Clock), Some(RED));
        assert_eq!(coord.tint(Channel::StatusIcon), Color(0x9900_0000));

        coord.set_icons_dark(true, false);
        assert_eq!(coord.tint(Channel::Clock), Color(0x9900_0000));
    }

    #[test]
    fn immediate_theme_color_shows_base_until_next_dark_change() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, false);
        coord.update_clock_color(GREEN, false);
        assert_eq!(coord.tint(Channel::Clock), GREEN);
        assert_eq!(coord.channel(Channel::Clock).base, GREEN);

        coord.set_icons_dark(false, false);
        assert_eq!(coord.tint(Channel::Clock), GREEN);
        coord.set_icons_dark(true, false);
        assert_eq!(coord.tint(Channel::Clock), Color(0x9900_0000));
    }

    #[test]
    fn theme_commit_survives_ticks_of_an_older_dark_animation() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, true);
        clock.advance(40);
        coord.tick();
        coord.update_clock_color(GREEN, false);

        run(&clock, &mut coord, 120, 20);
        assert_eq!(coord.dark_intensity(), 1.0);
        assert_eq!(coord.tint(Channel::Clock), GREEN);
        assert_eq!(coord.tint(Channel::StatusIcon), Color(0x9900_0000));
    }

    // ── dark palette ──────────────────────────────────────────────────────

    #[test]
    fn dark_palette_change_applies_while_idle() {
        let (_, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, false);
        let navy = Color(0xFF00_0080);
        coord.set_dark_colors(ChannelColors::uniform(navy));
        assert_eq!(coord.tint(Channel::StatusIcon), navy);
        assert_eq!(coord.elements().last(Channel::BatteryFrame), Some(navy));
    }

    #[test]
    fn dark_palette_change_is_picked_up_by_running_animation() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.set_icons_dark(true, true);
        clock.advance(40);
        coord.tick();
        let before = coord.tint(Channel::StatusIcon);

        let navy = Color(0xFF00_0080);
        coord.set_dark_colors(ChannelColors::uniform(navy));
        assert_eq!(coord.tint(Channel::StatusIcon), before);

        run(&clock, &mut coord, 120, 20);
        assert_eq!(coord.tint(Channel::StatusIcon), navy);
    }

    #[test]
    fn later_dark_change_overrides_running_blend() {
        let (clock, mut coord) = setup(TintConfig::default());
        coord.update_clock_color(RED, true);
        clock.advance(100);
        coord.tick();
        coord.set_icons_dark(true, false);
        assert_eq!(coord.tint(Channel::Clock), Color(0x9900_0000));

        clock.advance(100);
        coord.tick();
        assert_eq!(coord.tint(Channel::Clock), Color(0x9900_0000));
    }
}
