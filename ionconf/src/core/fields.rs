use ionconf_table::Table;

// Field readers shared by the settings marshaler and its delegates. Each one
// leaves `out` untouched when the key is absent or holds the wrong type.

pub(crate) fn read_bool(tab: &Table, key: &str, out: &mut bool) {
    if let Some(v) = tab.get_bool(key) {
        *out = v;
    }
}

pub(crate) fn read_float(tab: &Table, key: &str, out: &mut f64) {
    if let Some(v) = tab.get_float(key) {
        *out = v;
    }
}

/// Negative values are floored to zero.
pub(crate) fn read_non_negative(tab: &Table, key: &str, out: &mut i64) {
    if let Some(v) = tab.get_int(key) {
        *out = v.max(0);
    }
}

/// Zero and negative values become one.
pub(crate) fn read_positive(tab: &Table, key: &str, out: &mut i64) {
    if let Some(v) = tab.get_int(key) {
        *out = v.max(1);
    }
}

pub(crate) fn read_positive_float(tab: &Table, key: &str, out: &mut f64) {
    if let Some(v) = tab.get_float(key) {
        *out = if v > 0.0 { v } else { 1.0 };
    }
}
