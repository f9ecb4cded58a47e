use ionconf_table::Table;

use super::fields::{read_bool, read_float, read_non_negative};
use super::{
    key_of, value_of, State, FRAME_INDICES, GET_LAYOUT_KEY, GET_WINPROP_KEY, STACKING_REQUESTS,
};

impl State {
    /// Apply a settings table. Every field is optional; absent fields and
    /// fields of the wrong type leave the current value untouched, and
    /// unknown enum names keep the current value.
    ///
    /// Recognised fields: `opaque_resize`, `warp`, `warp_margin`,
    /// `warp_factor_x`, `warp_factor_y`, `switchto`, `screen_notify`,
    /// `framed_transients`, `unsqueeze`, `window_dialog_float`, `autoraise`,
    /// `autosave_layout`, `activity_notification_on_all_screens`,
    /// `window_stacking_request` (`ignore`/`activate`), `frame_default_index`
    /// (`last`/`next`/`next-act`), `mousefocus` (`disabled`/`sloppy`),
    /// `dblclick_delay`, `usertime_diff_current`, `usertime_diff_new`,
    /// `focuslist_insert_delay` and `workspace_indicator_timeout`, plus the
    /// keyboard resize and floating placement fields.
    pub fn set(&mut self, tab: &Table) {
        let s = &mut self.settings;

        read_bool(tab, "opaque_resize", &mut s.opaque_resize);
        read_bool(tab, "warp", &mut s.warp_enabled);
        read_non_negative(tab, "warp_margin", &mut s.warp_margin);
        read_float(tab, "warp_factor_x", &mut s.warp_factor[0]);
        read_float(tab, "warp_factor_y", &mut s.warp_factor[1]);
        read_bool(tab, "switchto", &mut s.switchto_new);
        read_bool(tab, "screen_notify", &mut s.screen_notify);
        read_bool(tab, "framed_transients", &mut s.framed_transients);
        read_bool(tab, "unsqueeze", &mut s.unsqueeze_enabled);
        read_bool(tab, "window_dialog_float", &mut s.window_dialog_float);
        read_bool(tab, "autoraise", &mut s.autoraise);
        read_bool(tab, "autosave_layout", &mut s.autosave_layout);

        if let Some(name) = tab.get_str("window_stacking_request") {
            s.window_stacking_request =
                value_of(STACKING_REQUESTS, name, s.window_stacking_request);
        }

        if let Some(name) = tab.get_str("frame_default_index") {
            s.frame_default_index = value_of(FRAME_INDICES, name, s.frame_default_index);
        }

        match tab.get_str("mousefocus") {
            Some("disabled") => s.no_mousefocus = true,
            Some("sloppy") => s.no_mousefocus = false,
            Some(other) => tracing::debug!("Ignoring mousefocus mode \"{}\"", other),
            None => {}
        }

        read_non_negative(tab, "dblclick_delay", &mut s.dblclick_delay);
        read_non_negative(tab, "usertime_diff_current", &mut s.usertime_diff_current);
        read_non_negative(tab, "usertime_diff_new", &mut s.usertime_diff_new);
        read_non_negative(tab, "focuslist_insert_delay", &mut s.focuslist_insert_delay);
        read_non_negative(
            tab,
            "workspace_indicator_timeout",
            &mut s.workspace_indicator_timeout,
        );

        read_bool(
            tab,
            "activity_notification_on_all_screens",
            &mut s.activity_notification_on_all_screens,
        );

        self.moveres.set(tab);
        self.groupws.set(tab);

        let winprop_fn = tab.get_fn(GET_WINPROP_KEY);
        let layout_fn = tab.get_fn(GET_LAYOUT_KEY);
        if (winprop_fn.is_some() || layout_fn.is_some()) && self.callbacks.is_protected() {
            tracing::debug!("Providers replaced from within a running provider");
        }
        if let Some(f) = winprop_fn {
            self.callbacks.set_winprop_fn(f);
        }
        if let Some(f) = layout_fn {
            self.callbacks.set_layout_fn(f);
        }
    }

    /// Snapshot of every setting in the form accepted by [`State::set`].
    /// The internal provider keys are never included.
    pub fn get(&self) -> Table {
        let s = &self.settings;
        let mut tab = Table::new();

        tab.set("opaque_resize", s.opaque_resize);
        tab.set("warp", s.warp_enabled);
        tab.set("warp_margin", s.warp_margin);
        tab.set("warp_factor_x", s.warp_factor[0]);
        tab.set("warp_factor_y", s.warp_factor[1]);
        tab.set("switchto", s.switchto_new);
        tab.set("dblclick_delay", s.dblclick_delay);
        tab.set("screen_notify", s.screen_notify);
        tab.set("framed_transients", s.framed_transients);
        tab.set("unsqueeze", s.unsqueeze_enabled);
        tab.set("window_dialog_float", s.window_dialog_float);
        tab.set("autoraise", s.autoraise);
        tab.set("autosave_layout", s.autosave_layout);
        tab.set("usertime_diff_current", s.usertime_diff_current);
        tab.set("usertime_diff_new", s.usertime_diff_new);
        tab.set("focuslist_insert_delay", s.focuslist_insert_delay);
        tab.set("workspace_indicator_timeout", s.workspace_indicator_timeout);
        tab.set(
            "activity_notification_on_all_screens",
            s.activity_notification_on_all_screens,
        );

        if let Some(name) = key_of(STACKING_REQUESTS, s.window_stacking_request, None) {
            tab.set("window_stacking_request", name);
        }
        if let Some(name) = key_of(FRAME_INDICES, s.frame_default_index, None) {
            tab.set("frame_default_index", name);
        }

        tab.set(
            "mousefocus",
            if s.no_mousefocus { "disabled" } else { "sloppy" },
        );

        self.moveres.get(&mut tab);
        self.groupws.get(&mut tab);

        tab
    }
}
