use super::StringMap;

/// Where new regions are inserted on a frame's mutually exclusive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameIndex {
    Last,
    AfterCurrent,
    #[default]
    AfterCurrentAct,
}

pub const FRAME_INDICES: &StringMap<FrameIndex> = &[
    ("last", FrameIndex::Last),
    ("next", FrameIndex::AfterCurrent),
    ("next-act", FrameIndex::AfterCurrentAct),
];

/// Response to a client asking to be stacked above its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackingRequest {
    #[default]
    Ignore,
    Activate,
}

pub const STACKING_REQUESTS: &StringMap<StackingRequest> = &[
    ("ignore", StackingRequest::Ignore),
    ("activate", StackingRequest::Activate),
];

/// Basic tunable settings.
///
/// Delays and timeouts are in milliseconds. `warp_factor` is the X/Y
/// position within the target the pointer is warped to, nominally in
/// `0.0..=1.0` with 0.5 being the center; the range is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub opaque_resize: bool,
    pub warp_enabled: bool,
    pub warp_margin: i64,
    pub warp_factor: [f64; 2],
    pub switchto_new: bool,
    pub screen_notify: bool,
    pub framed_transients: bool,
    pub unsqueeze_enabled: bool,
    pub window_dialog_float: bool,
    pub autoraise: bool,
    pub autosave_layout: bool,
    pub activity_notification_on_all_screens: bool,
    /// Set when mouse focus is "disabled"; cleared for "sloppy".
    pub no_mousefocus: bool,
    pub dblclick_delay: i64,
    pub usertime_diff_current: i64,
    pub usertime_diff_new: i64,
    /// Zero disables the delay: focus list is updated immediately.
    pub focuslist_insert_delay: i64,
    /// Zero disables the workspace indicator.
    pub workspace_indicator_timeout: i64,
    pub frame_default_index: FrameIndex,
    pub window_stacking_request: StackingRequest,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opaque_resize: false,
            warp_enabled: true,
            warp_margin: 5,
            warp_factor: [0.5, 0.5],
            switchto_new: true,
            screen_notify: true,
            framed_transients: true,
            unsqueeze_enabled: true,
            window_dialog_float: false,
            autoraise: true,
            autosave_layout: true,
            activity_notification_on_all_screens: false,
            no_mousefocus: false,
            dblclick_delay: 250,
            usertime_diff_current: 20,
            usertime_diff_new: 4000,
            focuslist_insert_delay: 1000,
            workspace_indicator_timeout: 0,
            frame_default_index: FrameIndex::default(),
            window_stacking_request: StackingRequest::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
}
