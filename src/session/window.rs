/// How a script window stacks relative to the host window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowZOrder {
    /// The window is independent of the host
    DisconnectedFromHost,
    /// The host owns the window, so it stays above the host while the host has focus
    #[default]
    KeepInFrontOfHost,
}

impl WindowZOrder {
    pub fn from_keep_in_front(keep_in_front: bool) -> Self {
        if keep_in_front {
            WindowZOrder::KeepInFrontOfHost
        } else {
            WindowZOrder::DisconnectedFromHost
        }
    }
}
