//! Text and file name helpers

use std::path::Path;

/// Extensions accepted for uploaded images
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Cut `text` to `max_chars` characters, appending "..." when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Lowercase extension without the dot, empty when there is none
pub fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

pub fn is_image_file(filename: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&file_extension(filename).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("おはようございます", 4), "おはよう...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn image_detection_ignores_case() {
        assert!(is_image_file("beach.JPG"));
        assert!(is_image_file("dir/photo.webp"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("no_extension"));
    }
}
