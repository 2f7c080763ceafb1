use std::collections::BTreeMap;

/// Output filename for a record.
///
/// Default is the record name plus `.png`. Records belonging to a
/// reversed-index family get their trailing `_<idx>` mirrored within the
/// family size: index i becomes size - 1 - i. A trailing piece that does not
/// parse as an integer leaves the name untouched.
pub fn output_file_name(name: &str, invert_limits: &BTreeMap<String, i64>) -> String {
    for (family, size) in invert_limits {
        if !name.contains(family.as_str()) {
            continue;
        }
        if let Some(idx) = name.rsplit('_').next().and_then(|s| s.parse::<i64>().ok()) {
            return format!("{}_{}.png", family, size - 1 - idx);
        }
    }
    format!("{}.png", name)
}
