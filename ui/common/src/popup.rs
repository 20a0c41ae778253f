use crate::Spot;

/// Link to a spot's detail page, shown when its marker is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub href: String,
    pub label: String,
}

impl Popup {
    pub fn for_spot(detail_route: &str, spot: &Spot) -> Self {
        Self {
            href: detail_href(detail_route, &spot.id),
            label: spot.location.clone(),
        }
    }

    /// Markup bound to the marker, `<a href='/posts/1'><b>Bobst</b></a>`
    pub fn html(&self) -> String {
        format!(
            "<a href='{}'><b>{}</b></a>",
            html_escape(&self.href),
            html_escape(&self.label)
        )
    }
}

pub fn detail_href(detail_route: &str, id: &str) -> String {
    format!("{}/{id}", detail_route.trim_end_matches('/'))
}

fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[test]
fn test_popup_html() {
    let spot = Spot::new("1", "Bobst", None);
    let popup = Popup::for_spot("/posts", &spot);
    assert_eq!(popup.href, "/posts/1");
    assert_eq!(popup.label, "Bobst");
    assert_eq!(popup.html(), "<a href='/posts/1'><b>Bobst</b></a>");
}

#[test]
fn test_popup_html_escapes_label() {
    let spot = Spot::new("7", "Joe's <Coffee> & Tea", None);
    assert_eq!(
        Popup::for_spot("/posts", &spot).html(),
        "<a href='/posts/7'><b>Joe&#39;s &lt;Coffee&gt; &amp; Tea</b></a>"
    );
}

#[test]
fn test_detail_href_trailing_slash() {
    assert_eq!(detail_href("/posts/", "abc"), "/posts/abc");
    assert_eq!(detail_href("/posts", "abc"), "/posts/abc");
}
