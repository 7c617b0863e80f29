/// Image served for badge names with no entry in the table.
pub const DEFAULT_BADGE_IMAGE: &str = "/images/badges/default.png";

/// Profile badge reference table. Lookup is string-exact; display names are
/// the keys the profile page sends back.
const BADGES: &[(&str, &str)] = &[
    ("First Entry", "/images/badges/first-entry.png"),
    ("7 Day Streak", "/images/badges/seven-day-streak.png"),
    ("30 Day Streak", "/images/badges/thirty-day-streak.png"),
    ("Early Bird", "/images/badges/early-bird.png"),
    ("Night Owl", "/images/badges/night-owl.png"),
    ("Deep Diver", "/images/badges/deep-diver.png"),
];

/// Resolve a badge name to its image path, falling back to the default image
/// for unknown names.
pub fn image_path(name: &str) -> &'static str {
    BADGES
        .iter()
        .find(|(badge, _)| *badge == name)
        .map(|(_, image)| *image)
        .unwrap_or(DEFAULT_BADGE_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_badge_resolves() {
        assert_eq!(image_path("First Entry"), "/images/badges/first-entry.png");
        assert_eq!(image_path("Night Owl"), "/images/badges/night-owl.png");
    }

    #[test]
    fn unknown_badge_falls_back_to_default() {
        assert_eq!(image_path("Imaginary Badge"), DEFAULT_BADGE_IMAGE);
        assert_eq!(image_path(""), DEFAULT_BADGE_IMAGE);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(image_path("first entry"), DEFAULT_BADGE_IMAGE);
    }
}
