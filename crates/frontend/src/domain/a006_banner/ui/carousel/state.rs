use contracts::domain::a006_banner::aggregate::Banner;

use crate::shared::scheduler::TimerCommand;

/// Direction of the last slide change, used for the transition styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Next,
    Prev,
}

impl SlideDirection {
    pub fn css_class(&self) -> &'static str {
        match self {
            SlideDirection::Next => "carousel-next",
            SlideDirection::Prev => "carousel-prev",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Loading,
    Empty,
    Showing,
}

/// Carousel state machine. Every transition returns what the auto-advance
/// task should do next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselState {
    banners: Vec<Banner>,
    active: usize,
    direction: SlideDirection,
    loaded: bool,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&mut self, banners: Vec<Banner>) -> TimerCommand {
        self.banners = banners;
        self.active = 0;
        self.direction = SlideDirection::Next;
        self.loaded = true;
        if self.auto_advance_enabled() {
            TimerCommand::Reset
        } else {
            TimerCommand::Cancel
        }
    }

    /// A failed fetch shows nothing, like an empty collection
    pub fn load_failed(&mut self) -> TimerCommand {
        self.loaded(Vec::new())
    }

    pub fn phase(&self) -> CarouselPhase {
        if !self.loaded {
            CarouselPhase::Loading
        } else if self.banners.is_empty() {
            CarouselPhase::Empty
        } else {
            CarouselPhase::Showing
        }
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn active_banner(&self) -> Option<&Banner> {
        self.banners.get(self.active)
    }

    /// Prev/next arrows are only shown with more than one banner
    pub fn controls_visible(&self) -> bool {
        self.len() > 1
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.len() > 1
    }

    /// Scheduled advance
    pub fn tick(&mut self) -> TimerCommand {
        if !self.auto_advance_enabled() {
            return TimerCommand::Cancel;
        }
        self.direction = SlideDirection::Next;
        self.active = (self.active + 1) % self.len();
        TimerCommand::Keep
    }

    /// Indicator click
    pub fn go_to_slide(&mut self, target: usize) -> TimerCommand {
        let len = self.len();
        if target >= len {
            return TimerCommand::Keep;
        }
        let wraps_forward = self.active == len - 1 && target == 0;
        self.direction = if target > self.active || wraps_forward {
            SlideDirection::Next
        } else {
            SlideDirection::Prev
        };
        self.active = target;
        self.after_manual_move()
    }

    pub fn go_to_prev(&mut self) -> TimerCommand {
        let len = self.len();
        if len == 0 {
            return TimerCommand::Keep;
        }
        self.direction = SlideDirection::Prev;
        self.active = (self.active + len - 1) % len;
        self.after_manual_move()
    }

    pub fn go_to_next(&mut self) -> TimerCommand {
        let len = self.len();
        if len == 0 {
            return TimerCommand::Keep;
        }
        self.direction = SlideDirection::Next;
        self.active = (self.active + 1) % len;
        self.after_manual_move()
    }

    // manual navigation restarts the period
    fn after_manual_move(&self) -> TimerCommand {
        if self.auto_advance_enabled() {
            TimerCommand::Reset
        } else {
            TimerCommand::Keep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banners(n: usize) -> Vec<Banner> {
        (0..n)
            .map(|i| Banner {
                id: Some(i as i64 + 1),
                orden: i as i32,
                ..Banner::default()
            })
            .collect()
    }

    fn showing(n: usize, active: usize) -> CarouselState {
        let mut state = CarouselState::new();
        state.loaded(banners(n));
        state.active = active;
        state
    }

    #[test]
    fn test_phases() {
        let mut state = CarouselState::new();
        assert_eq!(state.phase(), CarouselPhase::Loading);

        assert_eq!(state.loaded(Vec::new()), TimerCommand::Cancel);
        assert_eq!(state.phase(), CarouselPhase::Empty);

        assert_eq!(state.loaded(banners(3)), TimerCommand::Reset);
        assert_eq!(state.phase(), CarouselPhase::Showing);
    }

    #[test]
    fn test_failed_fetch_renders_nothing() {
        let mut state = CarouselState::new();
        assert_eq!(state.load_failed(), TimerCommand::Cancel);
        assert_eq!(state.phase(), CarouselPhase::Empty);
    }

    #[test]
    fn test_single_banner_has_no_timer_or_controls() {
        let mut state = CarouselState::new();
        assert_eq!(state.loaded(banners(1)), TimerCommand::Cancel);
        assert!(!state.controls_visible());
        assert!(!state.auto_advance_enabled());
        assert_eq!(state.tick(), TimerCommand::Cancel);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_tick_wraps_forward() {
        let mut state = showing(3, 2);
        state.direction = SlideDirection::Prev;
        assert_eq!(state.tick(), TimerCommand::Keep);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.direction(), SlideDirection::Next);
    }

    #[test]
    fn test_go_to_slide_direction_rule() {
        let mut state = showing(4, 2);
        state.go_to_slide(0);
        assert_eq!(state.direction(), SlideDirection::Prev);

        let mut state = showing(4, 2);
        state.go_to_slide(1);
        assert_eq!(state.direction(), SlideDirection::Prev);

        let mut state = showing(4, 2);
        state.go_to_slide(3);
        assert_eq!(state.direction(), SlideDirection::Next);
        assert_eq!(state.active_index(), 3);

        // from the last slide, jumping to the first counts as forward
        let mut state = showing(4, 3);
        state.go_to_slide(0);
        assert_eq!(state.direction(), SlideDirection::Next);
    }

    #[test]
    fn test_prev_next_wrap() {
        let mut state = showing(3, 0);
        assert_eq!(state.go_to_prev(), TimerCommand::Reset);
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.direction(), SlideDirection::Prev);

        assert_eq!(state.go_to_next(), TimerCommand::Reset);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.direction(), SlideDirection::Next);
    }

    #[test]
    fn test_out_of_range_slide_is_ignored() {
        let mut state = showing(2, 1);
        assert_eq!(state.go_to_slide(5), TimerCommand::Keep);
        assert_eq!(state.active_index(), 1);
    }
}
