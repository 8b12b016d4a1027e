//! Sample links files.

/// Two complete rows, one with description and tags.
pub const SAMPLE_LINKS: &str = "\
id,title,url,icon,description,tags
1,GitHub,https://github.com,GithubIcon,,
2,Mail,mailto:x,MailIcon,Contact me,work;personal
";

/// Rows that load only with fallbacks: an unknown icon, a bad id, no url.
pub const FALLBACK_LINKS: &str = "\
id,title,url,icon,description,tags
1,Feed,https://feed.test,RssIcon,,
abc,Notes,https://notes.test,GlobeIcon,,
3,Nowhere,,GlobeIcon,,
";

/// Links file with `count` rows titled `Link 1`..`Link <count>`.
pub fn numbered_links(count: usize) -> String {
    let mut csv = String::from("id,title,url,icon,description,tags\n");
    for i in 1..=count {
        csv.push_str(&format!(
            "{i},Link {i},https://link{i}.test,GlobeIcon,Link number {i},\n"
        ));
    }
    csv
}
