use crate::constants::{FOOTER_AUTHOR_HANDLE, FOOTER_AUTHOR_URL, FOOTER_SOCIAL_LINKS};
use crate::views::escape_html;

/// Static footer: copyright line for `year` and the author's social links.
pub fn render_footer(year: i32) -> String {
    let links: String = FOOTER_SOCIAL_LINKS
        .iter()
        .map(|(label, url)| {
            format!(
                r#"<a href="{url}" target="_blank" class="neumorphic-icon">{label}</a>"#,
                url = escape_html(url),
                label = escape_html(label),
            )
        })
        .collect();

    format!(
        concat!(
            r#"<footer class="footer neumorphic"><div class="footer-content">"#,
            r#"<div class="footer-text">&copy; {year} <a href="{author_url}" target="_blank">{author}</a>. All rights reserved.</div>"#,
            r#"<div class="social-links">{links}</div>"#,
            "</div></footer>"
        ),
        year = year,
        author_url = escape_html(FOOTER_AUTHOR_URL),
        author = escape_html(FOOTER_AUTHOR_HANDLE),
        links = links,
    )
}
