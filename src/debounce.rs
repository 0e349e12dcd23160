// Edge-triggered latch for the two momentary buttons (CLEAR, SIZE).
// A finger held on a button fires its action once. The latch only opens again on a global
// touch release; sliding out of the button while still touching elsewhere keeps it latched.
// A cooldown between activations also swallows quick release/re-touch bounces.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct ButtonLatch {
    pressed: bool,
    last_change: Option<Instant>, // None = never fired, so the first press always passes
    cooldown: Duration,
}

impl ButtonLatch {
    pub fn new(cooldown: Duration) -> Self {
        Self { pressed: false, last_change: None, cooldown }
    }

    pub fn is_latched(&self) -> bool {
        self.pressed
    }

    /// Feed one sample in which the touch lands on this button.
    /// Returns true exactly when the button's action must run.
    pub fn press(&mut self, now: Instant) -> bool {
        if self.pressed {
            return false;
        }
        let cooled_down = match self.last_change {
            Some(t) => now.saturating_duration_since(t) > self.cooldown,
            None => true,
        };
        if !cooled_down {
            return false;
        }
        self.pressed = true;
        self.last_change = Some(now);
        true
    }

    /// Touch lifted: unlatch. The cooldown clock keeps running from the last activation.
    pub fn release(&mut self) {
        self.pressed = false;
    }
}
