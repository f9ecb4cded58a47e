/// Static bidirectional mapping between option names and their values.
/// Lookups are exact and case-sensitive; the first matching entry wins.
pub type StringMap<T> = [(&'static str, T)];

/// Value paired with `key`, or `default` when the key is unknown.
pub fn value_of<T: Copy>(map: &StringMap<T>, key: &str, default: T) -> T {
    map.iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(default)
}

/// First key paired with `value`, or `default` when no entry has it.
pub fn key_of<T: PartialEq>(
    map: &StringMap<T>,
    value: T,
    default: Option<&'static str>,
) -> Option<&'static str> {
    map.iter()
        .find(|(_, v)| *v == value)
        .map(|(k, _)| *k)
        .or(default)
}
