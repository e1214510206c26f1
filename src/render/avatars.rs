/// Bundled avatar assets for the five known board members. Any name outside
/// this table renders without an avatar.
const USER_AVATARS: [(&str, &str); 5] = [
    ("Yogesh", "assets/yogesh.png"),
    ("Anoop sharma", "assets/anoop-sharma.jpg"),
    ("Shankar Kumar", "assets/shankar-kumar.jpg"),
    ("Ramesh", "assets/ramesh.png"),
    ("Suresh", "assets/suresh.png"),
];

pub fn avatar_for(name: &str) -> Option<&'static str> {
    USER_AVATARS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, asset)| *asset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(avatar_for("Yogesh"), Some("assets/yogesh.png"));
        assert_eq!(avatar_for("Anoop sharma"), Some("assets/anoop-sharma.jpg"));
    }

    #[test]
    fn test_unknown_names_have_no_avatar() {
        assert_eq!(avatar_for("Nobody"), None);
        // lookup is exact, same as the name keys in the asset table
        assert_eq!(avatar_for("yogesh"), None);
    }
}
