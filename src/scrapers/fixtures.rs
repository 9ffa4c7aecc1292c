//! Canned TruckScout24 pages shared by the scraper tests

pub const DETAIL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Renault Master</title></head>
<body>
  <h1 class="sc-ellipsis sc-font-xl"> Renault Master </h1>
  <h2 class="sc-highlighter-4 sc-highlighter-xl sc-font-bold">12.500 €</h2>

  <div class="data-basic">
    <div class="itemspace"><div class="itemlbl">Erstzulassung</div><div class="itemval">03/2016</div></div>
    <div class="itemspace"><div class="itemlbl">Kilometer</div><div class="itemval">150.000 km</div></div>
  </div>

  <div class="sc-expandable-box__content sc-grid-row">
    <ul>
      <li><div class="sc-font-bold">Kraftstoff</div><div>Diesel</div></li>
      <li><div class="sc-font-bold">Farbe</div><div>Weiß</div></li>
      <li><div class="sc-font-bold">Leistung</div><div>120 kW (163 PS)</div></li>
    </ul>
  </div>

  <div class="sc-expandable-box" data-target="[data-item-name='description']">
    <label class="sc-expandable-box__label">Gepflegt</label>
    <div class="short-description" data-type="description">Scheckheft gepflegt
        Kühlkoffer neu</div>
  </div>

  <div class="gallery">
    <img class="gallery-picture__image sc-lazy-image lazyload" data-src="https://img.example.test/a/1.jpg">
    <img class="gallery-picture__image sc-lazy-image lazyload" data-src="https://img.example.test/a/2.png">
    <img class="gallery-picture__image sc-lazy-image lazyload" data-src="https://img.example.test/a/3.jpg">
    <img class="gallery-picture__image sc-lazy-image lazyload" data-src="https://img.example.test/a/4.jpg">
  </div>
</body>
</html>"#;

/// Catalog page listing the given detail links in order
pub fn catalog_page(links: &[&str]) -> String {
    let items: String = links
        .iter()
        .map(|href| {
            format!(
                r#"<article><a data-item-name="detail-page-link" href=" {} ">Angebot</a></article>"#,
                href
            )
        })
        .collect();

    format!("<html><body><main>{}</main></body></html>", items)
}
