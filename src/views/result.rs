use crate::models::AddressForm;
use crate::views::escape_html;

/// Renders the local error block and the result cards for the current form state.
///
/// Returns an empty string when there is neither a result nor a local error.
pub fn render_result(form: &AddressForm) -> String {
    let mut html = String::new();

    if let Some(error) = &form.error {
        html.push_str(&format!(
            r#"<div class="error-message">{}</div>"#,
            escape_html(error)
        ));
    }

    let Some(result) = &form.result else {
        return html;
    };

    html.push_str(r#"<div class="result-container">"#);

    html.push_str(r#"<div class="card"><h2 class="card-header">Validation Result</h2><div class="card-content">"#);
    html.push_str(&format!(
        r#"<p class="status {status}">Status: {status}</p>"#,
        status = escape_html(&result.status)
    ));
    if let Some(blockchain) = result.blockchain() {
        html.push_str(&format!("<p>Blockchain: {}</p>", escape_html(blockchain)));
    }
    if let Some(error) = result.error_message() {
        html.push_str(&format!(
            r#"<p class="error">Error: {}</p>"#,
            escape_html(error)
        ));
    }
    html.push_str("</div></div>");

    if let Some(link) = form.explorer_link() {
        html.push_str(r#"<div class="card"><h2 class="card-header">Blockchain Explorer</h2><div class="card-content">"#);
        html.push_str(&format!(
            concat!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="explorer-link">"#,
                r#"View on Explorer<span class="external-link-icon">&#x2197;</span></a>"#
            ),
            escape_html(&link)
        ));
        html.push_str("</div></div>");
    }

    html.push_str("</div>");
    html
}
