//! Canonical part names.

/// Convert a legacy identifier into its canonical snake_case form.
///
/// Splits before every uppercase letter (except a leading one), lowercases
/// each segment and joins them with `_`. The result is the key used for part
/// identity everywhere after extraction.
///
/// # Example
/// ```
/// use modelupdate::base::normalize;
///
/// assert_eq!(normalize("RightArm"), "right_arm");
/// assert_eq!(normalize("right_arm"), "right_arm");
/// ```
pub fn normalize(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 4);
    for (index, c) in identifier.chars().enumerate() {
        if c.is_uppercase() {
            if index > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
