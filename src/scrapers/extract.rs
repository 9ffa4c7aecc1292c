use crate::models::Ad;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

// ── Selectors ────────────────────────────────────────────────────────────────

static AD_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-item-name="detail-page-link"]"#).unwrap());

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1.sc-ellipsis.sc-font-xl").unwrap());

static PRICE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h2.sc-highlighter-4.sc-highlighter-xl.sc-font-bold").unwrap()
});

static BASIC_DATA: Lazy<Selector> = Lazy::new(|| Selector::parse("div.data-basic").unwrap());
static BASIC_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.itemspace").unwrap());
static BASIC_LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div.itemlbl").unwrap());
static BASIC_VALUE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.itemval").unwrap());

static SPEC_LIST: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.sc-expandable-box__content.sc-grid-row").unwrap());
static SPEC_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());
static SPEC_LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div.sc-font-bold").unwrap());
// The value sits in an unstyled div next to the bold label
static SPEC_VALUE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div:not([class]), div[class=""]"#).unwrap());

static DESCRIPTION_BOX: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div.sc-expandable-box[data-target="[data-item-name='description']"]"#)
        .unwrap()
});
static DESCRIPTION_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("label.sc-expandable-box__label").unwrap());
static DESCRIPTION_BODY: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div.short-description[data-type="description"]"#).unwrap()
});

static GALLERY_IMAGE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("img.gallery-picture__image.sc-lazy-image.lazyload").unwrap()
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+[.,]?[0-9]*").unwrap());

const MILEAGE_LABEL: &str = "Kilometer";
const COLOR_LABEL: &str = "Farbe";
const POWER_LABEL: &str = "Leistung";

/// Lazy-load attribute carrying the real image URL
const IMAGE_SOURCE_ATTR: &str = "data-src";

// ── Public API ───────────────────────────────────────────────────────────────

/// Everything pulled out of one detail page
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub ad: Ad,
    /// Gallery image URLs, already capped
    pub images: Vec<String>,
}

/// Parse a detail page into its record and the image URLs to download.
///
/// Missing fields fall back to empty strings or zero. A gallery image
/// without a lazy-load source is an error.
pub fn parse_detail(html: &str, id: u32, href: &str, image_limit: usize) -> Result<Detail> {
    let document = Html::parse_document(html);
    let ad = extract_ad(&document, id, href);
    let images = gallery_sources(&document, image_limit)?;
    Ok(Detail { ad, images })
}

/// Raw `href` of the first listing link on a catalog page, trimmed.
/// `Ok(None)` means the catalog has no listings left.
pub fn first_ad_href(html: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);
    let Some(link) = document.select(&AD_LINK).next() else {
        return Ok(None);
    };

    match link.value().attr("href") {
        Some(href) => Ok(Some(href.trim().to_string())),
        None => anyhow::bail!("Listing link has no href attribute"),
    }
}

/// Build the listing record from a parsed detail page
pub fn extract_ad(document: &Html, id: u32, href: &str) -> Ad {
    let basic_items: Vec<ElementRef> = document
        .select(&BASIC_DATA)
        .next()
        .map(|block| block.select(&BASIC_ITEM).collect())
        .unwrap_or_default();

    let spec_items: Vec<ElementRef> = document
        .select(&SPEC_LIST)
        .next()
        .map(|block| block.select(&SPEC_ITEM).collect())
        .unwrap_or_default();

    Ad {
        id,
        href: href.to_string(),
        title: tag_text(document.select(&TITLE).next()),
        price: parse_number(&tag_text(document.select(&PRICE).next())),
        mileage: parse_number(&lookup_param(
            &basic_items,
            MILEAGE_LABEL,
            &BASIC_LABEL,
            &BASIC_VALUE,
        )),
        color: lookup_param(&spec_items, COLOR_LABEL, &SPEC_LABEL, &SPEC_VALUE),
        power: parse_number(&lookup_param(
            &spec_items,
            POWER_LABEL,
            &SPEC_LABEL,
            &SPEC_VALUE,
        )),
        description: description(document),
    }
}

/// Lazy-load sources of the first `limit` gallery images, in document order
pub fn gallery_sources(document: &Html, limit: usize) -> Result<Vec<String>> {
    document
        .select(&GALLERY_IMAGE)
        .take(limit)
        .enumerate()
        .map(|(i, img)| match img.value().attr(IMAGE_SOURCE_ATTR) {
            Some(src) => Ok(src.to_string()),
            None => anyhow::bail!("Gallery image {} has no {} attribute", i + 1, IMAGE_SOURCE_ATTR),
        })
        .collect()
}

/// Integer value of the first number in `text`.
///
/// `.` is treated as thousands grouping and dropped, `,` starts a fraction
/// that is discarded. Text without digits gives 0.
pub fn parse_number(text: &str) -> i64 {
    let Some(found) = NUMBER_RE.find(text) else {
        return 0;
    };

    let digits = found.as_str().replace('.', "");
    let whole = digits.split(',').next().unwrap_or_default();
    whole.parse().unwrap_or(0)
}

/// File name for the `position`-th (1-based) image, keeping the extension of
/// the URL's last path segment.
pub fn image_file_name(position: usize, url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();

    match segment.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("image_{}.{}", position, ext),
        _ => format!("image_{}", position),
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn tag_text(element: Option<ElementRef>) -> String {
    element
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Value paired with the first item whose label equals `name` exactly
fn lookup_param(
    items: &[ElementRef],
    name: &str,
    label: &Selector,
    value: &Selector,
) -> String {
    items
        .iter()
        .find(|item| tag_text(item.select(label).next()) == name)
        .map(|item| tag_text(item.select(value).next()))
        .unwrap_or_default()
}

fn description(document: &Html) -> String {
    let Some(container) = document.select(&DESCRIPTION_BOX).next() else {
        return String::new();
    };

    let title = container
        .select(&DESCRIPTION_TITLE)
        .next()
        .map(|label| format!("{}\n\n", tag_text(Some(label))))
        .unwrap_or_default();

    let body = container
        .select(&DESCRIPTION_BODY)
        .next()
        .map(|body| {
            body.text()
                .collect::<String>()
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    title + &body
}
