//! Printable HTML page built from print-target compositions.

use chrono::{DateTime, Local};
use schedario_engine::text::escape_html;
use schedario_engine::{ComposedRecord, Target};

const STYLE: &str = "body{font-family:serif;margin:2cm}\
.scheda{page-break-after:always}\
.scheda h1{margin-bottom:0}\
.sottotitolo{color:#444}\
.geometria{font-size:0.9em;color:#555}\
section.full{column-span:all}";

pub struct PrintPage<'a> {
    title: String,
    cards: &'a [ComposedRecord],
    generated_at: Option<DateTime<Local>>,
}

impl<'a> PrintPage<'a> {
    pub fn new(title: impl Into<String>, cards: &'a [ComposedRecord]) -> Self {
        Self {
            title: title.into(),
            cards,
            generated_at: None,
        }
    }

    pub fn generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"it\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
        if let Some(at) = self.generated_at {
            let stamp = at.format("%d/%m/%Y %H:%M");
            out.push_str(&format!("<p class=\"generato\">Generato il {}</p>\n", stamp));
        }
        for card in self.cards {
            render_card(&mut out, card, 1);
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn render_card(out: &mut String, card: &ComposedRecord, level: u8) {
    debug_assert_eq!(card.target, Target::Print);

    let title = escape_html(&card.header.title);
    out.push_str("<div class=\"scheda\">\n");
    out.push_str(&format!("<h{level}>{title}</h{level}>\n"));
    if let Some(subtitle) = &card.header.subtitle {
        let subtitle = escape_html(subtitle);
        out.push_str(&format!("<p class=\"sottotitolo\">{}</p>\n", subtitle));
    }

    if let Some(geometry) = &card.geometry {
        let kind = escape_html(&geometry.kind);
        out.push_str(&format!("<p class=\"geometria\">Geometria: {}", kind));
        if let Some([lng, lat]) = geometry.center {
            out.push_str(&format!(" · Centro: {:.6}, {:.6}", lat, lng));
        }
        if let Some([min_x, min_y, max_x, max_y]) = geometry.bbox {
            out.push_str(&format!(
                " · Estensione: [{:.6}, {:.6}] – [{:.6}, {:.6}]",
                min_y, min_x, max_y, max_x
            ));
        }
        out.push_str(&format!(" · Vertici: {}</p>\n", geometry.points));
    }

    if let Some(message) = card.empty_state {
        out.push_str(&format!("<p class=\"vuoto\">{}</p>\n", escape_html(message)));
    }

    let section_level = (level + 1).min(6);
    for section in &card.sections {
        let class = if section.full_width {
            " class=\"full\""
        } else {
            ""
        };
        let name = escape_html(&section.name);
        out.push_str(&format!("<section{}>\n", class));
        out.push_str(&format!("<h{section_level}>{name}</h{section_level}>\n"));
        for field in &section.fields {
            // Field text is already escaped for the print target.
            let label = escape_html(&field.label);
            let text = field.complete_text();
            out.push_str(&format!("<p><strong>{}:</strong> {}</p>\n", label, text));
        }
        out.push_str("</section>\n");
    }

    if !card.children.is_empty() {
        let heading = "Unità di ricognizione";
        out.push_str(&format!("<h{section_level}>{heading}</h{section_level}>\n"));
        for child in &card.children {
            render_card(out, child, section_level.saturating_add(1).min(6));
        }
    }
    out.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedario_engine::{compose, compose_with_children, datasets};
    use schedario_types::{DatasetKey, Feature, Geometry, PropertyMap, RecordId};

    #[test]
    fn test_print_page_escapes_and_keeps_breaks() {
        let props: PropertyMap = [("OGN", "Fornace <A>"), ("DES", "riga 1\nriga 2")]
            .into_iter()
            .collect();
        let feature = Feature::new(props).with_geometry(Geometry::point(11.75, 42.25));
        let card = compose(
            &feature,
            datasets::config(DatasetKey::Mosi),
            RecordId::new(DatasetKey::Mosi, 0),
            Target::Print,
        );
        let cards = [card];
        let html = PrintPage::new("Stampa", &cards).render();

        assert!(html.contains("<h1>Fornace &lt;A&gt;</h1>"));
        assert!(html.contains("<strong>Descrizione:</strong> riga 1<br />riga 2"));
        assert!(html.contains("Centro: 42.250000, 11.750000"));
        assert!(html.contains("Vertici: 1"));
    }

    #[test]
    fn test_children_are_nested() {
        let props: PropertyMap = [("Codice identificativo (RCGY) [*]", "U.R. 4")]
            .into_iter()
            .collect();
        let units = vec![Feature::new(props)];
        let card = compose_with_children(
            &Feature::default(),
            &units,
            datasets::config(DatasetKey::Ricognizioni),
            RecordId::new(DatasetKey::Ricognizioni, 0),
            Target::Print,
        );
        let cards = [card];
        let html = PrintPage::new("Stampa", &cards).render();
        assert!(html.contains("<h2>Unità di ricognizione</h2>"));
        assert!(html.contains("<h3>U.R. 4</h3>"));
        assert!(html.contains("Nessun dato da mostrare."));
    }
}
