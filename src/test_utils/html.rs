use scraper::{ElementRef, Html, Selector};

pub(crate) fn parse_html_document(text: &str) -> Html {
    Html::parse_document(text)
}

pub(crate) fn parse_html_fragment(text: &str) -> Html {
    Html::parse_fragment(text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Select all elements matching the CSS `selector`.
#[track_caller]
pub(crate) fn must_select<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    let parsed = Selector::parse(selector)
        .unwrap_or_else(|error| panic!("invalid selector {selector:?}: {error}"));

    html.select(&parsed).collect()
}
