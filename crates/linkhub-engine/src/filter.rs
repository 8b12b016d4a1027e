use linkhub_types::Link;

/// Whether `link` matches the free-text `query`.
///
/// Case-insensitive substring match against the title, the description and
/// every tag. An empty query matches everything.
pub fn matches(link: &Link, query: &str) -> bool {
    matches_folded(link, &query.to_lowercase())
}

/// Links matching `query`, in their original order.
pub fn filter_links<'a>(links: &'a [Link], query: &str) -> Vec<&'a Link> {
    let needle = query.to_lowercase();
    links
        .iter()
        .filter(|link| matches_folded(link, &needle))
        .collect()
}

fn matches_folded(link: &Link, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    contains_folded(&link.title, needle)
        || link
            .description
            .as_deref()
            .is_some_and(|description| contains_folded(description, needle))
        || link.tags().iter().any(|tag| contains_folded(tag, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Link> {
        vec![
            Link::new(1, "GitHub", "https://github.com"),
            Link::new(2, "Mail", "mailto:x")
                .with_description("Contact me")
                .with_tags(["work", "personal"]),
            Link::new(3, "Blog", "https://blog.test").with_description("Writing about Work"),
            Link::new(4, "Photos", "https://photos.test").with_tags(["Hobby"]),
        ]
    }

    fn ids(links: &[&Link]) -> Vec<i64> {
        links.iter().filter_map(|link| link.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let links = sample();
        assert_eq!(ids(&filter_links(&links, "")), [1, 2, 3, 4]);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let links = sample();
        assert_eq!(ids(&filter_links(&links, "github")), [1]);
        assert_eq!(ids(&filter_links(&links, "GITHUB")), [1]);
    }

    #[test]
    fn test_matches_description_and_tags() {
        let links = sample();
        // "work" is a tag of 2 and part of the description of 3
        assert_eq!(ids(&filter_links(&links, "work")), [2, 3]);
        assert_eq!(ids(&filter_links(&links, "hob")), [4]);
        assert_eq!(ids(&filter_links(&links, "contact")), [2]);
    }

    #[test]
    fn test_url_is_not_searched() {
        let links = sample();
        assert!(filter_links(&links, "mailto").is_empty());
    }

    #[test]
    fn test_no_match() {
        let links = sample();
        assert!(filter_links(&links, "zzz").is_empty());
    }

    #[test]
    fn test_matches_agrees_with_filter() {
        let links = sample();
        for query in ["", "o", "work", "PHOTOS", "me", "nothing"] {
            let filtered = filter_links(&links, query);
            let expected: Vec<&Link> = links.iter().filter(|l| matches(l, query)).collect();
            assert_eq!(filtered, expected, "query {:?}", query);
        }
    }
}
