use askama::Template;

use crate::pkg::internal::{adaptors::items::spec::ItemEntry, forms::FormErrors};

#[derive(Template)]
#[template(path = "test.html")]
pub struct TestPage {
    pub items: Vec<ItemEntry>,
    pub description: String,
    pub errors: FormErrors,
}

impl TestPage {
    pub fn blank(items: Vec<ItemEntry>) -> Self {
        TestPage {
            items,
            description: String::new(),
            errors: FormErrors::default(),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound<'a> {
    pub what: &'a str,
}
