/// Nouns that name who a gift is for.
pub const RECIPIENTS: &[&str] = &[
    "mom",
    "mother",
    "dad",
    "father",
    "parents",
    "grandma",
    "grandpa",
    "sister",
    "brother",
    "wife",
    "husband",
    "partner",
    "boyfriend",
    "girlfriend",
    "son",
    "daughter",
    "kids",
    "baby",
    "friend",
    "friends",
    "boss",
    "coworker",
    "colleague",
    "teacher",
    "neighbor",
];

/// First recipient noun in reading order, compared word by word so that
/// "grandma" is not read as "ma" and "momentum" is not read as "mom".
pub fn extract_recipient(query: &str) -> Option<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .find(|word| RECIPIENTS.contains(&word.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_recipient_anywhere_in_query() {
        assert_eq!(extract_recipient("gift ideas for mom"), Some("mom".into()));
        assert_eq!(extract_recipient("Something for my BOSS!"), Some("boss".into()));
    }

    #[test]
    fn earliest_recipient_wins() {
        assert_eq!(
            extract_recipient("gifts for dad and mom"),
            Some("dad".into())
        );
    }

    #[test]
    fn partial_words_do_not_match() {
        assert_eq!(extract_recipient("momentum gift for sonny"), None);
    }

    #[test]
    fn no_recipient_leaves_field_absent() {
        assert_eq!(extract_recipient("gift ideas under $50"), None);
        assert_eq!(extract_recipient(""), None);
    }
}
