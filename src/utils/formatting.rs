const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;

/// Cuts `value` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_label(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        let mut truncated = value.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        value.to_string()
    }
}

pub fn format_byte_size(bytes: usize) -> String {
    let size = bytes as f64;
    if size >= MIB {
        format!("{:.1} MB", size / MIB)
    } else if size >= KIB {
        format!("{:.1} KB", size / KIB)
    } else {
        let suffix = if bytes == 1 { "" } else { "s" };
        format!("{bytes} byte{suffix}")
    }
}
