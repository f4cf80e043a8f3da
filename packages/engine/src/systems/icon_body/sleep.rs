/// Per-axis sleep flags with their idle-frame counters.
///
/// Linear and angular motion sleep independently; waking always clears both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SleepState {
    pub linear: bool,
    pub angular: bool,
    pub linear_frames: u32,
    pub angular_frames: u32,
}

impl SleepState {
    pub fn wake(&mut self) {
        *self = SleepState::default();
    }

    pub fn is_fully_asleep(&self) -> bool {
        self.linear && self.angular
    }
}
