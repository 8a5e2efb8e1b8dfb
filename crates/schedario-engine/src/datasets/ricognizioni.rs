//! Ricognizioni: one survey (root record) with its survey units as children.

use super::{EMPTY_MARK, place_line};
use crate::config::{DatasetConfig, Header, HeaderContext, ListItem, RecordSummary};
use crate::registry::{FieldDefinition as F, FieldRegistry};
use crate::target::Target;
use schedario_types::{DatasetKey, PropertyMap};

const DENOMINAZIONE: &str = "Denominazione (RCGV)";
const DATA: &str = "Data (RCGD) [*]";
const CODICE: &str = "Codice identificativo (RCGH) [*]";
const COMUNE: &str = "Comune (PVCC) [*]";
const PROVINCIA: &str = "Provincia (PVCP) [*]";
const REGIONE: &str = "Regione (PVCR) [*]";
const MOTIVO: &str = "Motivo della ricognizione (RCGE)";
const METODO: &str = "Metodo di ricognizione (RCGM)";
const RESPONSABILE: &str = "Responsabile scientifico (RCGA)";

/// Identifier of a survey unit, e.g. "U.R. 12".
pub const UNIT_IDENTIFIER: &str = "Codice identificativo (RCGY) [*]";
const VISIBILITA: &str = "Visibilità (RCGC) [*]";
const COPERTURA: &str = "Copertura del suolo (RCGU) [*]";

const DEFAULT_TITLE: &str = "Ricognizione territoriale";

const ROOT_FIELDS: &[F] = &[
    F::new(MOTIVO, "Motivo della ricognizione", "Ricognizione"),
    F::new(METODO, "Metodo di ricognizione", "Ricognizione"),
    F::new(
        "Ente finanziatore (RCGF)",
        "Ente finanziatore",
        "Ricognizione",
    ),
    F::new(
        "Ente responsabile (RCGR)",
        "Ente responsabile",
        "Ricognizione",
    ),
    F::new(RESPONSABILE, "Responsabile scientifico", "Ricognizione"),
    F::new("Descrizione (NSC)", "Descrizione", "Ricognizione"),
    F::new("PVCS", "Stato", "Localizzazione"),
    F::new(REGIONE, "Regione", "Localizzazione"),
    F::new(PROVINCIA, "Provincia", "Localizzazione"),
    F::new(COMUNE, "Comune", "Localizzazione"),
    F::new("Località (PVCL)", "Località", "Localizzazione"),
    F::new("Indirizzo (PVCI)", "Indirizzo", "Localizzazione"),
    F::new(
        "Altri percorsi/specifiche (PVCV)",
        "Altri percorsi / specifiche",
        "Localizzazione",
    ),
    F::new("PVL", "Toponimo / località", "Localizzazione"),
    F::new(
        "Tipo di contesto (PVZ)",
        "Tipo di contesto",
        "Localizzazione",
    ),
    F::new("GEL", "Tipo di localizzazione", "Georeferenziazione"),
    F::new("GET", "Tipo di georeferenziazione", "Georeferenziazione"),
    F::new("GEP", "Sistema di riferimento", "Georeferenziazione"),
    F::new(
        "Tecnica di georeferenziazione (GPT) [*]",
        "Tecnica di georeferenziazione",
        "Georeferenziazione",
    ),
    F::new(
        "Grado di precisione del posizionamento (GPM) [*]",
        "Grado di precisione",
        "Georeferenziazione",
    ),
    F::new(
        "Base cartografica (GPBB) [*]",
        "Base cartografica",
        "Georeferenziazione",
    ),
    F::new(
        "Note alla georeferenziazione (GEN)",
        "Note alla georeferenziazione",
        "Georeferenziazione",
    ),
    F::new("Comune catastale (CTSC)", "Comune catastale", "Catasto"),
    F::new("CTST", "Titolo catastale", "Catasto"),
    F::new("Foglio/data (CTSF)", "Foglio / data", "Catasto"),
    F::new("Particelle (CTSN)", "Particelle", "Catasto"),
    F::new(
        "Elementi confinanti (CTE)",
        "Elementi confinanti",
        "Catasto",
    ),
    F::new("Note (CTN)", "Note catastali", "Catasto"),
    F::new(
        "Anno di redazione (CMPD) [*]",
        "Anno di redazione",
        "Compilazione e responsabilità",
    ),
    F::new(
        "Nome del compilatore (CMPN) [*]",
        "Nome del compilatore",
        "Compilazione e responsabilità",
    ),
    F::new(
        "Responsabile della verifica scientifica (RSR)",
        "Responsabile verifica scientifica",
        "Compilazione e responsabilità",
    ),
    F::new(
        "Funzionario responsabile (FUR) [*]",
        "Funzionario responsabile",
        "Compilazione e responsabilità",
    ),
    F::new(
        "Ente schedatore (RCGJ) [*]",
        "Ente schedatore",
        "Compilazione e responsabilità",
    ),
    F::new(
        "Codice progetto (CPR_MOPR) [*]",
        "Codice progetto",
        "Compilazione e responsabilità",
    ),
    F::new("Note (OSS)", "Note", "Compilazione e responsabilità"),
];

const ROOT_SECTION_ORDER: &[&str] = &[
    "Ricognizione",
    "Localizzazione",
    "Georeferenziazione",
    "Catasto",
    "Compilazione e responsabilità",
];

const UNIT_SECTION: &str = "Unità di ricognizione";

const UNIT_FIELDS: &[F] = &[
    F::new(
        "Specifiche relative alla copertura del suolo (RCGZ)",
        "Specifiche copertura del suolo",
        UNIT_SECTION,
    )
    .truncated(350),
    F::new(
        "Sintesi geomorfologica/ geopedologica (RCGT)",
        "Sintesi geomorfologica / geopedologica",
        UNIT_SECTION,
    )
    .truncated(350),
    F::new("Note (CTN)", "Note", UNIT_SECTION).truncated(300),
];

struct SurveySummary;

impl RecordSummary for SurveySummary {
    fn header(&self, props: &PropertyMap, ctx: HeaderContext) -> Header {
        let subtitle = format!(
            "Data: {} · Codice: {} · {}",
            props.text_or(DATA, EMPTY_MARK),
            props.text_or(CODICE, EMPTY_MARK),
            place_line(props, COMUNE, PROVINCIA, REGIONE)
        );
        let title = props.text_or(DENOMINAZIONE, DEFAULT_TITLE);
        let mut header = Header::new(title).with_subtitle(subtitle);

        if ctx.target == Target::Interactive {
            let badges = [
                ("Motivo", MOTIVO),
                ("Metodo", METODO),
                ("Resp. scient.", RESPONSABILE),
            ];
            for (caption, key) in badges {
                if props.is_populated(key) {
                    header = header.with_badge(format!("{}: {}", caption, props.text(key)));
                }
            }
        }
        header
    }

    fn list_item(&self, props: &PropertyMap, _ctx: HeaderContext) -> ListItem {
        ListItem {
            title: props.text_or(DENOMINAZIONE, DEFAULT_TITLE),
            meta: format!(
                "Data: {} · Codice: {}",
                props.text_or(DATA, EMPTY_MARK),
                props.text_or(CODICE, EMPTY_MARK)
            ),
        }
    }
}

struct UnitSummary;

impl UnitSummary {
    fn title(props: &PropertyMap, ctx: HeaderContext) -> String {
        let fallback = format!("U.R. {}", ctx.position.unwrap_or(0) + 1);
        props.text_or(UNIT_IDENTIFIER, &fallback)
    }

    fn meta(props: &PropertyMap) -> String {
        format!(
            "Data: {} · Visibilità: {} · Copertura: {}",
            props.text_or(DATA, EMPTY_MARK),
            props.text_or(VISIBILITA, EMPTY_MARK),
            props.text_or(COPERTURA, EMPTY_MARK)
        )
    }
}

impl RecordSummary for UnitSummary {
    fn header(&self, props: &PropertyMap, ctx: HeaderContext) -> Header {
        Header::new(Self::title(props, ctx)).with_subtitle(Self::meta(props))
    }

    fn list_item(&self, props: &PropertyMap, ctx: HeaderContext) -> ListItem {
        ListItem {
            title: Self::title(props, ctx),
            meta: Self::meta(props),
        }
    }
}

pub static UNIT_CONFIG: DatasetConfig = DatasetConfig {
    key: DatasetKey::Ricognizioni,
    label: "Unità di ricognizione",
    registry: FieldRegistry::new(UNIT_FIELDS),
    section_order: &[UNIT_SECTION],
    full_width_sections: &[],
    search_fields: &[],
    summary: Some(&UnitSummary),
    children: None,
    identifier_key: None,
};

pub static CONFIG: DatasetConfig = DatasetConfig {
    key: DatasetKey::Ricognizioni,
    label: "Ricognizioni",
    registry: FieldRegistry::new(ROOT_FIELDS),
    section_order: ROOT_SECTION_ORDER,
    full_width_sections: &["Ricognizione"],
    search_fields: &[],
    summary: Some(&SurveySummary),
    children: Some(&UNIT_CONFIG),
    identifier_key: Some(UNIT_IDENTIFIER),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_header_defaults() {
        let header = CONFIG.header(&PropertyMap::new(), HeaderContext::new(Target::Print));
        assert_eq!(header.title, "Ricognizione territoriale");
        assert_eq!(
            header.subtitle.as_deref(),
            Some("Data: vuoto · Codice: vuoto · Comune: vuoto")
        );
    }

    #[test]
    fn test_root_badges() {
        let props: PropertyMap = [(MOTIVO, "VPIA"), (RESPONSABILE, "M. Rossi")]
            .into_iter()
            .collect();
        let header = CONFIG.header(&props, HeaderContext::new(Target::Interactive));
        assert_eq!(
            header.badges,
            vec!["Motivo: VPIA", "Resp. scient.: M. Rossi"]
        );
    }

    #[test]
    fn test_unit_title_falls_back_to_position() {
        let ctx = HeaderContext::new(Target::Interactive).at(2);
        let header = UNIT_CONFIG.header(&PropertyMap::new(), ctx);
        assert_eq!(header.title, "U.R. 3");
        assert_eq!(
            header.subtitle.as_deref(),
            Some("Data: vuoto · Visibilità: vuoto · Copertura: vuoto")
        );

        let props: PropertyMap = [(UNIT_IDENTIFIER, "U.R. 7")].into_iter().collect();
        let header = UNIT_CONFIG.header(&props, ctx);
        assert_eq!(header.title, "U.R. 7");
    }

    #[test]
    fn test_unit_truncation_limits() {
        let limits: Vec<(&str, usize)> = UNIT_CONFIG
            .registry
            .iter()
            .filter_map(|f| f.truncation.map(|t| (f.label, t.max_length)))
            .collect();
        assert_eq!(
            limits,
            vec![
                ("Specifiche copertura del suolo", 350),
                ("Sintesi geomorfologica / geopedologica", 350),
                ("Note", 300),
            ]
        );
    }
}
