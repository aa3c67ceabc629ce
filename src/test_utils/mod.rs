#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod upstream;

pub(crate) use form::{assert_hx_endpoint, must_get_form};
pub(crate) use html::{assert_valid_html, must_select, parse_html_document, parse_html_fragment};
pub(crate) use upstream::{FixtureUpstream, sample_dataset, test_server};
