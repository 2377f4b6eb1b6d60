//! Turn plain notice text into safe HTML with clickable links.
//!
//! The notice body arrives as free text written by staff. It is escaped first,
//! so nothing in it is interpreted as markup, and bare URLs are then wrapped in
//! anchors that open in a new tab.

const URL_PREFIXES: [&str; 3] = ["https://", "http://", "www."];

const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Closing brackets are only part of a URL when the URL also opened them.
const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape `text` and wrap every bare URL in an `<a>` element.
pub fn link_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut plain_start = 0;
    let mut i = 0;

    while i < text.len() {
        if let Some(len) = url_len_at(text, i) {
            out.push_str(&html_escape(&text[plain_start..i]));
            push_anchor(&mut out, &text[i..i + len]);
            i += len;
            plain_start = i;
        } else {
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&html_escape(&text[plain_start..]));
    out
}

fn push_anchor(out: &mut String, url: &str) {
    let href = if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
        format!("http://{url}")
    } else {
        url.to_string()
    };
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        html_escape(&href),
        html_escape(url)
    ));
}

/// Byte length of the URL starting at `start`, if one starts there.
fn url_len_at(text: &str, start: usize) -> Option<usize> {
    // Must not be glued to a preceding word ("foohttp://" is not a link)
    if let Some(prev) = text[..start].chars().next_back() {
        if prev.is_ascii_alphanumeric() || prev == '/' || prev == '.' {
            return None;
        }
    }

    let prefix = URL_PREFIXES.iter().find(|p| {
        text.get(start..start + p.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(p))
    })?;

    let rest = &text[start..];
    let end = rest
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\''))
        .unwrap_or(rest.len());
    let url = trim_trailing(&rest[..end]);

    // A bare prefix with nothing after it is just text
    if url.len() <= prefix.len() {
        return None;
    }
    Some(url.len())
}

fn trim_trailing(mut url: &str) -> &str {
    loop {
        let Some(last) = url.chars().next_back() else {
            return url;
        };
        let unbalanced_close = BRACKETS
            .iter()
            .find(|(_, close)| *close == last)
            .is_some_and(|(open, close)| url.matches(*close).count() > url.matches(*open).count());
        if TRAILING_PUNCTUATION.contains(&last) || unbalanced_close {
            url = &url[..url.len() - last.len_utf8()];
        } else {
            return url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(
            link_urls("a <b> & \"c\""),
            "a &lt;b&gt; &amp; &quot;c&quot;"
        );
    }

    #[test]
    fn test_bare_url_becomes_anchor() {
        let html = link_urls("신청: https://forms.example.com/abc 까지");
        assert_eq!(
            html,
            "신청: <a href=\"https://forms.example.com/abc\" target=\"_blank\" \
             rel=\"noopener noreferrer\">https://forms.example.com/abc</a> 까지"
        );
    }

    #[test]
    fn test_trailing_punctuation_stays_outside() {
        let html = link_urls("See http://a.kr/x.");
        assert!(html.contains(">http://a.kr/x</a>."));
    }

    #[test]
    fn test_parentheses() {
        let html = link_urls("(공지 https://a.kr/n)");
        assert!(html.contains("href=\"https://a.kr/n\""));
        assert!(html.ends_with("</a>)"));

        let html = link_urls("https://en.wikipedia.org/wiki/Rust_(language)");
        assert!(html.contains("href=\"https://en.wikipedia.org/wiki/Rust_(language)\""));
    }

    #[test]
    fn test_square_and_curly_brackets() {
        let html = link_urls("[https://a.kr]");
        assert!(html.starts_with("[<a href=\"https://a.kr\""));
        assert!(html.ends_with(">https://a.kr</a>]"));

        let html = link_urls("{https://a.kr/x}");
        assert!(html.contains("href=\"https://a.kr/x\""));
        assert!(html.ends_with("</a>}"));

        let html = link_urls("https://a.kr/list[0]");
        assert!(html.contains("href=\"https://a.kr/list[0]\""));
    }

    #[test]
    fn test_www_gets_scheme_in_href_only() {
        let html = link_urls("www.dimigo.hs.kr");
        assert!(html.contains("href=\"http://www.dimigo.hs.kr\""));
        assert!(html.contains(">www.dimigo.hs.kr</a>"));
    }

    #[test]
    fn test_query_string_is_escaped_in_anchor() {
        let html = link_urls("https://x.kr/?a=1&b=2");
        assert!(html.contains("href=\"https://x.kr/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_not_a_link() {
        assert_eq!(link_urls("foohttp://x.kr"), "foohttp://x.kr");
        assert_eq!(link_urls("http:// alone"), "http:// alone");
        assert_eq!(link_urls(""), "");
    }

    #[test]
    fn test_multiple_urls_and_newlines() {
        let html = link_urls("1) https://a.kr\n2) https://b.kr");
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("</a>\n2) "));
    }
}
