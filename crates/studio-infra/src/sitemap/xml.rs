use std::io::Cursor;
use std::string::FromUtf8Error;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use studio_core::domain::SitemapUrl;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, thiserror::Error)]
pub enum SitemapRenderError {
    #[error("XML write failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Rendered sitemap is not UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Renders a sitemaps.org `urlset`. Each `<url>` lists `loc`, `priority`,
/// `changefreq` and, when known, `lastmod`.
pub fn render_sitemap(urls: &[SitemapUrl]) -> Result<String, SitemapRenderError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
    ))?;

    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &url.loc)?;
        text_element(&mut writer, "priority", &url.priority_text())?;
        text_element(&mut writer, "changefreq", url.changefreq.as_str())?;
        if let Some(lastmod) = url.lastmod_text() {
            text_element(&mut writer, "lastmod", &lastmod)?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use studio_core::domain::ChangeFrequency;

    #[test]
    fn renders_urlset_with_children_in_order() {
        let urls = vec![
            SitemapUrl::new("https://example.com/", 1.0, ChangeFrequency::Daily),
            SitemapUrl::new("https://example.com/blog/hello", 0.7, ChangeFrequency::Weekly)
                .with_lastmod(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()),
        ];

        let xml = render_sitemap(&urls).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert_eq!(xml.matches("<url>").count(), 2);

        let loc = xml.find("<loc>https://example.com/blog/hello</loc>").unwrap();
        let priority = xml.find("<priority>0.7</priority>").unwrap();
        let changefreq = xml.find("<changefreq>weekly</changefreq>").unwrap();
        let lastmod = xml.find("<lastmod>2024-03-09</lastmod>").unwrap();
        assert!(loc < priority && priority < changefreq && changefreq < lastmod);
    }

    #[test]
    fn escapes_markup_in_locations() {
        let urls = vec![SitemapUrl::new(
            "https://example.com/?a=1&b=2",
            0.5,
            ChangeFrequency::Monthly,
        )];
        let xml = render_sitemap(&urls).unwrap();
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }
}
