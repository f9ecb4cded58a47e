use ionconf_table::Table;

use super::fields::{read_non_negative, read_positive, read_positive_float};

/// Keyboard move/resize acceleration parameters.
///
/// When a keyboard resize step arrives more than `t_max` ms after the
/// previous one, acceleration is reset to 1.0. Otherwise, once at least
/// `t_min` ms have passed since the last update, the square root of the
/// acceleration factor grows by `step`, up to `maxacc`. Keyboard resize
/// mode ends after `delay` ms of inactivity.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveresAccel {
    pub delay: i64,
    pub t_max: i64,
    pub t_min: i64,
    pub step: f64,
    pub maxacc: f64,
}

impl Default for MoveresAccel {
    fn default() -> Self {
        Self {
            delay: 1500,
            t_max: 200,
            t_min: 50,
            step: 30.0,
            maxacc: 100.0,
        }
    }
}

impl MoveresAccel {
    pub fn set(&mut self, tab: &Table) {
        read_positive(tab, "kbresize_t_max", &mut self.t_max);
        read_positive(tab, "kbresize_t_min", &mut self.t_min);
        read_positive_float(tab, "kbresize_step", &mut self.step);
        read_positive_float(tab, "kbresize_maxacc", &mut self.maxacc);
        read_non_negative(tab, "kbresize_delay", &mut self.delay);
    }

    pub fn get(&self, tab: &mut Table) {
        tab.set("kbresize_delay", self.delay);
        tab.set("kbresize_t_max", self.t_max);
        tab.set("kbresize_t_min", self.t_min);
        tab.set("kbresize_step", self.step);
        tab.set("kbresize_maxacc", self.maxacc);
    }
}
