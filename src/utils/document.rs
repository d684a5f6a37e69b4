use scraper::{ElementRef, Html};

/// Why a labeled lookup came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMiss {
    Label,
    Sibling,
}

/// A parsed page that can be queried for the bits of text an ip lookup site hands back.
pub trait Document: Sized {
    fn parse(html: &str) -> Self;

    /// all text in the document with the markup stripped
    fn text(&self) -> String;

    /// text of the first `tag` sibling that follows a `tag` element whose text is exactly `label`
    fn sibling_text_after_label(&self, tag: &str, label: &str) -> Result<String, LabelMiss>;
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    fn elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name().eq_ignore_ascii_case(tag))
    }
}

impl Document for HtmlDocument {
    fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    fn text(&self) -> String {
        self.html.root_element().text().collect()
    }

    fn sibling_text_after_label(&self, tag: &str, label: &str) -> Result<String, LabelMiss> {
        let label_el = self
            .elements_named(tag)
            .find(|el| el.text().collect::<String>() == label)
            .ok_or(LabelMiss::Label)?;

        let sibling = label_el
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name().eq_ignore_ascii_case(tag))
            .ok_or(LabelMiss::Sibling)?;

        Ok(sibling.text().collect())
    }
}
