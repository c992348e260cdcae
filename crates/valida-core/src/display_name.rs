//! Human-readable names derived from Rust type names.

/// Strip module qualifiers from every path inside a type name.
///
/// Generic punctuation is kept as is, so
/// `my_app::user::Required<my_app::user::FirstName>` becomes
/// `Required<FirstName>`.
pub fn strip_type_path(type_name: &str) -> String {
    let mut result = String::with_capacity(type_name.len());
    let mut segment_start = 0;

    for (index, ch) in type_name.char_indices() {
        if is_delimiter(ch) {
            result.push_str(last_segment(&type_name[segment_start..index]));
            result.push(ch);
            segment_start = index + ch.len_utf8();
        }
    }
    result.push_str(last_segment(&type_name[segment_start..]));

    result
}

/// Default display name of `T`: its type name without module paths.
pub fn intrinsic_display_name<T: ?Sized>() -> String {
    strip_type_path(std::any::type_name::<T>())
}

fn is_delimiter(ch: char) -> bool {
    matches!(
        ch,
        '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*'
    )
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
