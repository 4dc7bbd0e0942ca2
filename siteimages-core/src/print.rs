//! Console report lines for a generation run.

use crate::pipeline::GeneratedFile;

pub const HERO_HEADER: &str = "Generating hero images...";
pub const CARD_HEADER: &str = "Generating location card images...";
pub const DONE_HEADER: &str = "All images generated successfully!";

/// `  Created: <path> (<n> bytes)`
pub fn created_line(file: &GeneratedFile) -> String {
    format!("  Created: {} ({} bytes)", file.path.display(), file.bytes)
}

/// Final listing, one `  <filename>: <n> bytes` line per file, sorted by name.
pub fn summary_lines(files: &[GeneratedFile]) -> Vec<String> {
    let mut sorted: Vec<_> = files.iter().collect();
    sorted.sort_by(|a, b| a.filename.cmp(&b.filename));
    sorted
        .into_iter()
        .map(|f| format!("  {}: {} bytes", f.filename, group_thousands(f.bytes)))
        .collect()
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, bytes: u64) -> GeneratedFile {
        GeneratedFile {
            template_id: name.trim_end_matches(".webp").to_string(),
            filename: name.to_string(),
            path: PathBuf::from("assets/images").join(name),
            size: [600, 400],
            bytes,
            sha256: String::new(),
            template_hash: String::new(),
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(48213), "48,213");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_created_line() {
        let line = created_line(&file("location-north-bristol.webp", 20480));
        assert_eq!(line, "  Created: assets/images/location-north-bristol.webp (20480 bytes)");
    }

    #[test]
    fn test_summary_sorted_by_filename() {
        let files = [
            file("location-west-bristol.webp", 1500),
            file("hero-locations-bristol.webp", 123456),
            file("location-central-bristol.webp", 999),
        ];
        assert_eq!(
            summary_lines(&files),
            [
                "  hero-locations-bristol.webp: 123,456 bytes",
                "  location-central-bristol.webp: 999 bytes",
                "  location-west-bristol.webp: 1,500 bytes",
            ]
        );
    }
}
