//! Technology badge colors for tag chips

use ratatui::style::Color;

/// Known technologies, matched in order by substring
const BADGES: &[(&str, Color)] = &[
    ("React", Color::Rgb(97, 218, 251)),
    ("Laravel", Color::Rgb(255, 45, 32)),
    ("Flutter", Color::Rgb(84, 197, 248)),
    ("Firebase", Color::Rgb(255, 202, 40)),
    ("Tailwind", Color::Rgb(56, 189, 248)),
    ("MySQL", Color::Rgb(0, 117, 143)),
    ("Python", Color::Rgb(255, 212, 59)),
    ("JS", Color::Rgb(247, 223, 30)),
];

/// Brand color for a technology tag, if it names a known technology.
///
/// Matching is a case-sensitive substring test, so "Tailwind CSS" and
/// "React.js" both resolve.
pub fn badge_color(tech: &str) -> Option<Color> {
    BADGES
        .iter()
        .find(|(key, _)| tech.contains(key))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        assert_eq!(badge_color("Tailwind CSS"), Some(Color::Rgb(56, 189, 248)));
        assert_eq!(badge_color("React.js"), Some(Color::Rgb(97, 218, 251)));
    }

    #[test]
    fn test_unknown_tech_has_no_badge() {
        assert_eq!(badge_color("Dart"), None);
        assert_eq!(badge_color("Context API"), None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(badge_color("Node.js"), None);
        assert_eq!(badge_color("react"), None);
    }
}
