use strum::IntoEnumIterator;

use crate::models::{AddressForm, Blockchain};
use crate::views::{escape_html, render_footer, render_result, styles::PAGE_STYLES};

const SUBMIT_LABEL: &str = "Validate";
const LOADING_LABEL: &str = "Validating...";

/// Inline `onsubmit` script: disables the submit button and swaps its label while the
/// browser waits for the POST, so a form instance has one request in flight at most.
fn submit_handler() -> String {
    format!(
        "var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='{}';",
        LOADING_LABEL
    )
}

fn render_chain_options(selected: Option<&str>) -> String {
    let mut options = String::from(r#"<option value="">Auto-detect</option>"#);
    for chain in Blockchain::iter() {
        let is_selected = selected.is_some_and(|s| s.eq_ignore_ascii_case(chain.as_ref()));
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = chain,
            selected = if is_selected { " selected" } else { "" },
        ));
    }
    options
}

fn render_form(form: &AddressForm) -> String {
    let (disabled, label) = if form.is_loading {
        (" disabled", LOADING_LABEL)
    } else {
        ("", SUBMIT_LABEL)
    };

    format!(
        concat!(
            r#"<form method="post" action="/" onsubmit="{handler}">"#,
            r#"<label>Address:<input type="text" name="address" value="{address}" placeholder="Enter crypto address"></label>"#,
            r#"<label>Blockchain (optional):<select name="blockchain">{options}</select></label>"#,
            r#"<button type="submit"{disabled}>{label}</button>"#,
            "</form>"
        ),
        handler = submit_handler(),
        address = escape_html(&form.address),
        options = render_chain_options(form.blockchain.as_deref()),
        disabled = disabled,
        label = label,
    )
}

/// Renders the full page for `form`, with `year` shown in the footer.
pub fn render_page(form: &AddressForm, year: i32) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>Crypto Address Checker</title><style>{styles}</style></head>",
            r#"<body><div class="container"><h1>Crypto Address Checker</h1>{form}{result}</div>{footer}</body></html>"#
        ),
        styles = PAGE_STYLES,
        form = render_form(form),
        result = render_result(form),
        footer = render_footer(year),
    )
}
