// What the decider needs to know about a citizen ID before it decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitizenState {
    Unregistered,
    Registered,
}

impl CitizenState {
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            CitizenState::Registered
        } else {
            CitizenState::Unregistered
        }
    }
}
