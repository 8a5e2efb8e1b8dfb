//! MOPR: project module. Keys are the verbose column headers of the source export.

use super::{EMPTY_MARK, place_line};
use crate::config::{DatasetConfig, Header, HeaderContext, ListItem, RecordSummary};
use crate::registry::{FieldDefinition as F, FieldRegistry};
use crate::target::Target;
use schedario_types::{DatasetKey, PropertyMap};

const DENOMINAZIONE: &str = "Denominazione (OGN) [*]";
const COMUNE: &str = "Comune (LCC) [*]";
const PROVINCIA: &str = "Provincia (LCP) [*]";
const REGIONE: &str = "Regione (LCR) [*]";
const CODICE_PROGETTO: &str = "Codice progetto (CPR) [*]";
const CATEGORIA: &str = "Categoria dell'opera (CTG) [*]";
const FASE: &str = "Fase di progetto (OGF) [*]";
const DATA_RELAZIONE: &str = "Data della relazione archeologica (DRL) [*]";
const AMBITO_TUTELA: &str = "<B>(*) AMB - Ambito d tutela MiC [*]";
const AMBITO_APPLICAZIONE: &str = "Ambito di applicazione (AMA) [*]";
const DESCRIZIONE: &str = "Descrizione delle opere in progetto (DES) [*] [10000 caratteri]";

const LONG_TEXT: usize = 500;

const FIELDS: &[F] = &[
    F::new("fid", "ID interno", "Codici e riferimenti"),
    F::new(
        CODICE_PROGETTO,
        "Codice progetto",
        "Identificazione progetto",
    ),
    F::new(
        "Ente responsabile del progetto (ERP) [*]",
        "Ente responsabile del progetto",
        "Identificazione progetto",
    ),
    F::new(
        "Enti MiC coinvolti (EMC) [*]",
        "Enti MiC coinvolti",
        "Identificazione progetto",
    ),
    F::new(DENOMINAZIONE, "Denominazione", "Identificazione progetto"),
    F::new(
        CATEGORIA,
        "Categoria dell'opera",
        "Identificazione progetto",
    ),
    F::new(
        "Tipo di opera (OGT) [*]",
        "Tipo di opera",
        "Identificazione progetto",
    ),
    F::new(FASE, "Fase di progetto", "Identificazione progetto"),
    F::new(
        DATA_RELAZIONE,
        "Data della relazione archeologica",
        "Identificazione progetto",
    ),
    F::new(
        "Ente/Soggetto responsabile (ACCE)",
        "Ente / Soggetto responsabile",
        "Codici e riferimenti",
    ),
    F::new(
        "Codice identificativo (ACCC)",
        "Codice identificativo (ACCC)",
        "Codici e riferimenti",
    ),
    F::new("Note (ACCS)", "Note al codice", "Codici e riferimenti"),
    F::new(
        "Codice identificativo (RCGH) [*]",
        "Codice identificativo RCGH",
        "Codici e riferimenti",
    ),
    F::new(
        "Codice identificativo (DCMN)",
        "Codice DCMN",
        "Codici e riferimenti",
    ),
    F::new("MOPR_id", "MOPR ID", "Codici e riferimenti"),
    F::new("gid", "Codice univoco (gid)", "Codici e riferimenti"),
    F::new(AMBITO_TUTELA, "Ambito di tutela MiC", "Ambito e tutela"),
    F::new(
        AMBITO_APPLICAZIONE,
        "Ambito di applicazione",
        "Ambito e tutela",
    ),
    F::new(
        "SABAP di riferimento (ENTE) [*]",
        "SABAP di riferimento",
        "Ambito e tutela",
    ),
    F::new("Note (ENTE_NOTE)", "Note sull'ente", "Ambito e tutela"),
    F::new(
        "Profilo di accesso (ADP) [*]",
        "Profilo di accesso",
        "Ambito e tutela",
    ),
    F::new(
        DESCRIZIONE,
        "Descrizione delle opere in progetto",
        "Descrizione opere",
    ),
    F::new(
        "Modalità di individuazione (OGM) [*]",
        "Modalità di individuazione",
        "Descrizione opere",
    ),
    F::new("LCS", "Stato", "Localizzazione"),
    F::new(REGIONE, "Regione", "Localizzazione"),
    F::new(PROVINCIA, "Provincia", "Localizzazione"),
    F::new(COMUNE, "Comune", "Localizzazione"),
    F::new(
        "Tipo di localizzazione (GEL) [*]",
        "Tipo di localizzazione",
        "Georeferenziazione",
    ),
    F::new(
        "Tipo di georeferenziazione (GET) [*]",
        "Tipo di georeferenziazione",
        "Georeferenziazione",
    ),
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
        "Note al posizionamento (GEN)",
        "Note al posizionamento",
        "Georeferenziazione",
    ),
    F::new("Tipo di misura (MISZ)", "Tipo di misura", "Misure"),
    F::new("Unità di misura (MISU)", "Unità di misura", "Misure"),
    F::new(
        "Geomorfologia (CAE) [5000 caratteri]",
        "Geomorfologia",
        "Quadro ambientale",
    )
    .truncated(LONG_TEXT),
    F::new(
        "Caratteri ambientali storici (CAS) [10000 caratteri]",
        "Caratteri ambientali storici",
        "Quadro ambientale",
    )
    .truncated(LONG_TEXT),
    F::new(
        "Caratteri ambientali attuali (CAA) [10000 caratteri]",
        "Caratteri ambientali attuali",
        "Quadro ambientale",
    )
    .truncated(LONG_TEXT),
    F::new(
        "Note (CAN) [2000 caratteri]",
        "Note ambientali",
        "Quadro ambientale",
    ),
    F::new(
        "Sintesi storico archeologica (CAV) [10000 caratteri]",
        "Sintesi storico-archeologica",
        "Quadro storico-archeologico",
    )
    .truncated(LONG_TEXT),
    F::new("Tipo (DCMP)", "Tipo", "Immagine"),
    F::new("Specifiche (DCMS)", "Specifiche", "Immagine"),
    F::new(
        "Titolo/ didascalia (DCMM)",
        "Titolo / didascalia",
        "Immagine",
    ),
    F::new("Autore (DCMA)", "Autore", "Immagine"),
    F::new(
        "Riferimento cronologico (DCMR)",
        "Riferimento cronologico",
        "Immagine",
    ),
    F::new("Ente proprietario (DCME)", "Ente proprietario", "Immagine"),
    F::new("Collocazione (DCMC)", "Collocazione", "Immagine"),
    F::new("Licenza (DCML)", "Licenza", "Immagine"),
    F::new(
        "Indirizzo web (URL) (DCMW)",
        "Indirizzo web (URL)",
        "Immagine",
    ),
    F::new(
        "Autorizzazione privacy (DCMY)",
        "Autorizzazione privacy",
        "Immagine",
    ),
    // Column name is missing its opening parenthesis in the source export.
    F::new("Nome fileDCMK)", "Nome file", "Immagine"),
    F::new("Note (DCMT)", "Note", "Immagine"),
    F::new(
        "Abbreviazioni bibliografiche (BIBR)",
        "Abbreviazioni bibliografiche",
        "Bibliografia e archivio",
    ),
    F::new("BIBX", "Sigle bibliografiche", "Bibliografia e archivio"),
    F::new(
        "Riferimenti bibliografici completi (BIBM) [1000 caratteri]",
        "Riferimenti bibliografici completi",
        "Bibliografia e archivio",
    ),
    F::new(
        "Funzionario responsabile (FUR) [*]",
        "Funzionario responsabile",
        "Certificazione e dati",
    ),
    F::new(
        "Anno di redazione (CMA) [*]",
        "Anno di redazione",
        "Certificazione e dati",
    ),
    F::new(
        "Responsabile della compilazione (CMC) [*]",
        "Responsabile della compilazione",
        "Certificazione e dati",
    ),
    F::new(
        "Responsabile dei contenuti (CMR) [*]",
        "Responsabile dei contenuti",
        "Certificazione e dati",
    ),
    F::new(
        "Data della campagna di ricognizione (RGCD) [*]",
        "Data della campagna di ricognizione",
        "Certificazione e dati",
    ),
    F::new(
        "Ente schedatore (RCGJ) [*]",
        "Ente schedatore",
        "Certificazione e dati",
    ),
];

const SECTION_ORDER: &[&str] = &[
    "Identificazione progetto",
    "Ambito e tutela",
    "Descrizione opere",
    "Localizzazione",
    "Georeferenziazione",
    "Misure",
    "Quadro ambientale",
    "Quadro storico-archeologico",
    "Bibliografia e archivio",
    "Immagine",
    "Certificazione e dati",
    "Codici e riferimenti",
];

struct MoprSummary;

impl RecordSummary for MoprSummary {
    fn header(&self, props: &PropertyMap, ctx: HeaderContext) -> Header {
        let mut subtitle = place_line(props, COMUNE, PROVINCIA, REGIONE);
        if props.is_populated(CODICE_PROGETTO) {
            subtitle.push_str(&format!(" · Codice progetto: {}", props.text(CODICE_PROGETTO)));
        }
        let interactive = ctx.target == Target::Interactive;
        if interactive && props.is_populated(CATEGORIA) {
            subtitle.push_str(&format!(" · Categoria: {}", props.text(CATEGORIA)));
        }

        let title = props.text_or(DENOMINAZIONE, EMPTY_MARK);
        let mut header = Header::new(title).with_subtitle(subtitle);
        if interactive {
            let badges = [
                ("Ambito MiC", AMBITO_TUTELA),
                ("Ambito applicazione", AMBITO_APPLICAZIONE),
                ("Fase", FASE),
                ("Relazione", DATA_RELAZIONE),
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
        let mut meta = match props.text(COMUNE) {
            comune if comune.is_empty() => format!("Comune: {}", EMPTY_MARK),
            comune => comune,
        };
        if props.is_populated(PROVINCIA) {
            meta.push_str(&format!(" (Prov. {})", props.text(PROVINCIA)));
        }
        if props.is_populated(CODICE_PROGETTO) {
            meta.push_str(&format!(" · Progetto: {}", props.text(CODICE_PROGETTO)));
        }
        if props.is_populated(FASE) {
            meta.push_str(&format!(" · Fase: {}", props.text(FASE)));
        }
        ListItem {
            title: props.text_or(DENOMINAZIONE, EMPTY_MARK),
            meta,
        }
    }
}

pub static CONFIG: DatasetConfig = DatasetConfig {
    key: DatasetKey::Mopr,
    label: "MOPR",
    registry: FieldRegistry::new(FIELDS),
    section_order: SECTION_ORDER,
    full_width_sections: &[
        "Descrizione opere",
        "Quadro ambientale",
        "Quadro storico-archeologico",
        "Bibliografia e archivio",
    ],
    search_fields: &[DENOMINAZIONE, COMUNE, DESCRIZIONE],
    summary: Some(&MoprSummary),
    children: None,
    identifier_key: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environmental_texts_truncate_at_500() {
        let truncated: Vec<&str> = CONFIG
            .registry
            .iter()
            .filter(|f| f.truncation.map(|t| t.max_length) == Some(500))
            .map(|f| f.label)
            .collect();
        assert_eq!(
            truncated,
            vec![
                "Geomorfologia",
                "Caratteri ambientali storici",
                "Caratteri ambientali attuali",
                "Sintesi storico-archeologica",
            ]
        );
    }

    #[test]
    fn test_header_and_list_item() {
        let props: PropertyMap = [
            (DENOMINAZIONE, "Raddoppio ferroviario"),
            (COMUNE, "Orte"),
            (CODICE_PROGETTO, "P-17"),
            (CATEGORIA, "Infrastrutture"),
            (FASE, "Definitivo"),
        ]
        .into_iter()
        .collect();

        let header = CONFIG.header(&props, HeaderContext::new(Target::Interactive));
        assert_eq!(
            header.subtitle.as_deref(),
            Some("Comune: Orte · Codice progetto: P-17 · Categoria: Infrastrutture")
        );
        assert_eq!(header.badges, vec!["Fase: Definitivo"]);

        let print = CONFIG.header(&props, HeaderContext::new(Target::Print));
        assert_eq!(
            print.subtitle.as_deref(),
            Some("Comune: Orte · Codice progetto: P-17")
        );

        let item = CONFIG.list_item(&props, HeaderContext::new(Target::Interactive));
        assert_eq!(item.meta, "Orte · Progetto: P-17 · Fase: Definitivo");
    }

    #[test]
    fn test_declares_twelve_sections() {
        assert_eq!(SECTION_ORDER.len(), 12);
        for section in CONFIG.registry.sections() {
            assert!(SECTION_ORDER.contains(&section), "{} not ordered", section);
        }
    }
}
