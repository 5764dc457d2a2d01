/// Author credited in the page footer.
pub const FOOTER_AUTHOR_HANDLE: &str = "@feyfry";

pub const FOOTER_AUTHOR_URL: &str = "https://github.com/feyfry";

/// Social links as `(label, url)`, rendered in this order.
pub const FOOTER_SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "https://www.facebook.com/feyfry35"),
    ("Medium", "https://feyfry.medium.com"),
    ("GitHub", "https://github.com/feyfry?tab=repositories"),
];
