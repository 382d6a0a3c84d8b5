//! Sitemap rendering.

mod xml;

pub use xml::{SITEMAP_NAMESPACE, SitemapRenderError, render_sitemap};
